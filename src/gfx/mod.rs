//! # Graphics Module
//!
//! This module contains the geometry side of the Kessel renderer: procedural
//! mesh generation, the device upload handoff, object transforms and the scene
//! manifest.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Vertex layout, mesh buffers and shape generators
//! - **GPU Meshes** ([`mesh`]) - One-time upload into wgpu buffers and indexed draws
//! - **Transforms** ([`transform`]) - Per-object position, rotation and scale
//! - **Scene** ([`scene`]) - The showcase objects and the point light
//!
//! Generation is pure: a [`geometry::Mesh`] never holds device handles, so every
//! generator runs and is tested without a window or GPU.
//!
//! ## Usage
//!
//! ```no_run
//! use kessel::gfx::{geometry::HexPrism, mesh::GpuMesh};
//!
//! # fn upload(device: &wgpu::Device) -> Result<(), kessel::error::MeshError> {
//! let mesh = HexPrism::new(0.5, 1.0).generate()?;
//! let gpu_mesh = GpuMesh::upload(device, &mesh, "hexagon");
//! assert_eq!(gpu_mesh.index_count() as usize, mesh.index_count());
//! # Ok(())
//! # }
//! ```

pub mod geometry;
pub mod mesh;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Mesh, Vertex};
pub use mesh::{DrawMesh, GpuMesh};
pub use scene::Scene;
pub use transform::Transform;
