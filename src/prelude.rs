//! # Kessel Prelude
//!
//! Commonly used types and generators in one import.
//!
//! ```
//! use kessel::prelude::*;
//!
//! let sphere = generate_sphere(2.0, 4, 2)?;
//! assert_eq!(sphere.as_floats().len(), sphere.vertex_count() * FLOATS_PER_VERTEX);
//! # Ok::<(), MeshError>(())
//! ```

// Errors
pub use crate::error::MeshError;

// Geometry
pub use crate::gfx::geometry::{
    generate_cube, generate_cylinder, generate_hex_frustum, generate_hex_prism, generate_sphere,
    tie_wing, Cylinder, HexFrustum, HexPrism, Mesh, UvSphere, Vertex, FLOATS_PER_VERTEX,
};

// Rendering handoff
pub use crate::gfx::mesh::{primitive_state, DrawMesh, GpuMesh, FRONT_FACE};
pub use crate::gfx::scene::{PointLight, Scene, SceneObject, Shape};
pub use crate::gfx::transform::Transform;

// Re-export common external dependencies
pub use cgmath::{Matrix4, Vector3};
