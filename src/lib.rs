//! Kessel
//!
//! Procedural mesh generation for a small wgpu scene renderer: hexagonal
//! prisms, tapered hexagonal frustums, UV spheres, cylinders, cubes and a
//! hand-authored tie fighter wing, all in one interleaved vertex layout.

pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::MeshError;
pub use gfx::geometry::Mesh;
