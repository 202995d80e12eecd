//! # Tie Fighter Wing
//!
//! The wing panel is a flat hexagonal wedge, 0.1 units thick along X, built
//! from hand-placed vertices rather than a parametric generator. The data is
//! a plain triangle list: every three consecutive vertices form one triangle.

use super::{Mesh, Vertex};

/// Number of vertices in the wing table.
pub const TIE_WING_VERTEX_COUNT: usize = 72;

const fn v(position: [f32; 3], tex_coords: [f32; 2], normal: [f32; 3]) -> Vertex {
    Vertex::new(position, tex_coords, normal)
}

/// Each plate is a fan of six triangles around its center G = (x, 0, 0) over the
/// hexagon A C D B F E, and six edge quads join the plates. Slanted edge
/// normals are `(0, ±3, ±5) / sqrt(34)`.
pub static TIE_WING_VERTICES: [Vertex; TIE_WING_VERTEX_COUNT] = [
    // Front plate (x = 0)
    v([0.0, 0.0, -0.6], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.5, -0.3], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.0], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.5, -0.3], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.5, 0.3], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.0], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.5, 0.3], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.6], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.0], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.6], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([0.0, -0.5, 0.3], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.0], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, -0.5, 0.3], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([0.0, -0.5, -0.3], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.0], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, -0.5, -0.3], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, -0.6], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([0.0, 0.0, 0.0], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    // Back plate (x = 0.1)
    v([0.1, 0.0, -0.6], [0.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.0], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.5, -0.3], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.5, -0.3], [0.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.0], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.5, 0.3], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.5, 0.3], [0.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.0], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.6], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.6], [0.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.0], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, -0.5, 0.3], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, -0.5, 0.3], [0.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.0], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, -0.5, -0.3], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, -0.5, -0.3], [0.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, 0.0], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.1, 0.0, -0.6], [0.0, 1.0], [1.0, 0.0, 0.0]),
    // Upper-left edge A-C
    v([0.0, 0.0, -0.6], [1.0, 1.0], [0.0, 0.514_495_8, -0.857_492_9]),
    v([0.1, 0.0, -0.6], [1.0, 0.0], [0.0, 0.514_495_8, -0.857_492_9]),
    v([0.1, 0.5, -0.3], [0.0, 0.0], [0.0, 0.514_495_8, -0.857_492_9]),
    v([0.1, 0.5, -0.3], [1.0, 1.0], [0.0, 0.514_495_8, -0.857_492_9]),
    v([0.0, 0.5, -0.3], [1.0, 0.0], [0.0, 0.514_495_8, -0.857_492_9]),
    v([0.0, 0.0, -0.6], [0.0, 0.0], [0.0, 0.514_495_8, -0.857_492_9]),
    // Top edge C-D
    v([0.0, 0.5, -0.3], [1.0, 1.0], [0.0, 1.0, 0.0]),
    v([0.1, 0.5, -0.3], [1.0, 0.0], [0.0, 1.0, 0.0]),
    v([0.1, 0.5, 0.3], [0.0, 0.0], [0.0, 1.0, 0.0]),
    v([0.1, 0.5, 0.3], [1.0, 1.0], [0.0, 1.0, 0.0]),
    v([0.0, 0.5, 0.3], [1.0, 0.0], [0.0, 1.0, 0.0]),
    v([0.0, 0.5, -0.3], [0.0, 0.0], [0.0, 1.0, 0.0]),
    // Upper-right edge D-B
    v([0.0, 0.5, 0.3], [1.0, 1.0], [0.0, 0.514_495_8, 0.857_492_9]),
    v([0.1, 0.5, 0.3], [1.0, 0.0], [0.0, 0.514_495_8, 0.857_492_9]),
    v([0.1, 0.0, 0.6], [0.0, 0.0], [0.0, 0.514_495_8, 0.857_492_9]),
    v([0.1, 0.0, 0.6], [1.0, 1.0], [0.0, 0.514_495_8, 0.857_492_9]),
    v([0.0, 0.0, 0.6], [1.0, 0.0], [0.0, 0.514_495_8, 0.857_492_9]),
    v([0.0, 0.5, 0.3], [0.0, 0.0], [0.0, 0.514_495_8, 0.857_492_9]),
    // Lower-right edge B-F
    v([0.0, 0.0, 0.6], [1.0, 1.0], [0.0, -0.514_495_8, 0.857_492_9]),
    v([0.1, 0.0, 0.6], [1.0, 0.0], [0.0, -0.514_495_8, 0.857_492_9]),
    v([0.1, -0.5, 0.3], [0.0, 0.0], [0.0, -0.514_495_8, 0.857_492_9]),
    v([0.1, -0.5, 0.3], [1.0, 1.0], [0.0, -0.514_495_8, 0.857_492_9]),
    v([0.0, -0.5, 0.3], [1.0, 0.0], [0.0, -0.514_495_8, 0.857_492_9]),
    v([0.0, 0.0, 0.6], [0.0, 0.0], [0.0, -0.514_495_8, 0.857_492_9]),
    // Bottom edge F-E
    v([0.0, -0.5, 0.3], [1.0, 0.0], [0.0, -1.0, 0.0]),
    v([0.1, -0.5, 0.3], [1.0, 1.0], [0.0, -1.0, 0.0]),
    v([0.1, -0.5, -0.3], [0.0, 1.0], [0.0, -1.0, 0.0]),
    v([0.1, -0.5, -0.3], [0.0, 1.0], [0.0, -1.0, 0.0]),
    v([0.0, -0.5, -0.3], [0.0, 1.0], [0.0, -1.0, 0.0]),
    v([0.0, -0.5, 0.3], [1.0, 0.0], [0.0, -1.0, 0.0]),
    // Lower-left edge E-A
    v([0.0, -0.5, -0.3], [1.0, 1.0], [0.0, -0.514_495_8, -0.857_492_9]),
    v([0.1, -0.5, -0.3], [1.0, 0.0], [0.0, -0.514_495_8, -0.857_492_9]),
    v([0.1, 0.0, -0.6], [0.0, 0.0], [0.0, -0.514_495_8, -0.857_492_9]),
    v([0.1, 0.0, -0.6], [1.0, 1.0], [0.0, -0.514_495_8, -0.857_492_9]),
    v([0.0, 0.0, -0.6], [1.0, 0.0], [0.0, -0.514_495_8, -0.857_492_9]),
    v([0.0, -0.5, -0.3], [0.0, 0.0], [0.0, -0.514_495_8, -0.857_492_9]),
];

/// Builds the wing mesh with sequential indices `0..72`.
pub fn tie_wing() -> Mesh {
    let mut mesh = Mesh::with_capacity(TIE_WING_VERTEX_COUNT, TIE_WING_VERTEX_COUNT);
    for vertex in TIE_WING_VERTICES {
        mesh.push_vertex(vertex);
    }
    mesh.extend_triangles(
        (0..TIE_WING_VERTEX_COUNT as u32 / 3).map(|t| [3 * t, 3 * t + 1, 3 * t + 2]),
    );
    mesh
}
