//! # Primitive Shape Generation
//!
//! Cubes and cylinders used around the scene. Both share the vertex layout
//! and winding of the hex generators.

use super::frustum::{revolve, MAX_SEGMENTS, MIN_SEGMENTS};
use super::{Mesh, Vertex};
use crate::error::{check_dimension, check_subdivision, Result};

/// Generate a cube centered at the origin
///
/// Returns a cube with vertices from `-size/2` to `size/2` on all axes.
/// Each face has its own four vertices so normals stay flat, and UV
/// coordinates span 0 to 1 per face.
pub fn generate_cube(size: f32) -> Result<Mesh> {
    let half = check_dimension("Cube", "size", size)? * 0.5;

    // Corner table lists each face counter-clockwise seen from outside
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // Front (+Z)
        (
            [0.0, 0.0, 1.0],
            [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
        ),
        // Back (-Z)
        (
            [0.0, 0.0, -1.0],
            [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
        ),
        // Left (-X)
        (
            [-1.0, 0.0, 0.0],
            [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
        ),
        // Right (+X)
        (
            [1.0, 0.0, 0.0],
            [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
        ),
        // Top (+Y)
        (
            [0.0, 1.0, 0.0],
            [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
        ),
        // Bottom (-Y)
        (
            [0.0, -1.0, 0.0],
            [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
        ),
    ];
    let tex_coords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = Mesh::with_capacity(24, 36);
    for (normal, corners) in faces {
        let first = mesh.next_index();
        for (corner, uv) in corners.into_iter().zip(tex_coords) {
            mesh.push_vertex(Vertex::new(corner.map(|c| c * half), uv, normal));
        }
        // Indices walk the corners in reverse, clockwise from outside, to
        // match the fan/strip winding of the revolved shapes
        mesh.extend_triangles([
            [first, first + 2, first + 1],
            [first + 2, first, first + 3],
        ]);
    }

    log::debug!("Generated Cube (size={size}): 24 vertices, 36 indices");
    Ok(mesh)
}

/// Configuration for a round cylinder: a revolved prism with many segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            segments: 36,
        }
    }
}

impl Cylinder {
    pub fn new(radius: f32, height: f32, segments: u32) -> Self {
        Self {
            radius,
            height,
            segments,
        }
    }

    pub fn generate(&self) -> Result<Mesh> {
        const SHAPE: &str = "Cylinder";
        let radius = check_dimension(SHAPE, "radius", self.radius)?;
        let height = check_dimension(SHAPE, "height", self.height)?;
        let segments =
            check_subdivision(SHAPE, "segments", self.segments, MIN_SEGMENTS, MAX_SEGMENTS)?;

        let mesh = revolve(radius, radius, height, segments, |cos, sin| [cos, 0.0, sin]);
        log::debug!(
            "Generated {SHAPE} (r={radius}, h={height}, segments={segments}): {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );
        Ok(mesh)
    }
}

/// Generate a cylinder with specified parameters
///
/// Returns a cylinder centered at the origin extending from -height/2 to height/2 in Y.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> Result<Mesh> {
    Cylinder::new(radius, height, segments).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::gfx::geometry::tests::{assert_outward_clockwise, assert_well_formed, init_logging};

    #[test]
    fn test_cube_generation() {
        init_logging();
        let cube = generate_cube(2.0).unwrap();
        assert_eq!(cube.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.index_count(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);
        assert_well_formed(&cube);
        assert_outward_clockwise(&cube);

        for vertex in cube.vertices() {
            assert!(vertex.position.iter().all(|c| c.abs() == 1.0));
        }
    }

    #[test]
    fn test_cube_face_normals_point_away_from_center() {
        let cube = generate_cube(0.8).unwrap();
        for vertex in cube.vertices() {
            let dot: f32 = vertex
                .position
                .iter()
                .zip(vertex.normal)
                .map(|(p, n)| p * n)
                .sum();
            assert!((dot - 0.4).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cube_rejects_zero_size() {
        assert!(matches!(
            generate_cube(0.0),
            Err(MeshError::InvalidDimension { shape: "Cube", .. })
        ));
    }

    #[test]
    fn test_cylinder_generation() {
        let cylinder = Cylinder::default().generate().unwrap();
        assert_eq!(cylinder.vertex_count(), 4 * 37 + 2);
        assert_eq!(cylinder.index_count(), 12 * 36);
        assert_well_formed(&cylinder);
        assert_outward_clockwise(&cylinder);

        for vertex in &cylinder.vertices()[2 * 38..] {
            let [x, y, z] = vertex.position;
            assert!(((x * x + z * z).sqrt() - 0.5).abs() < 1e-5);
            assert!((y.abs() - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cylinder_rejects_too_few_segments() {
        assert!(matches!(
            generate_cylinder(0.5, 1.0, 2),
            Err(MeshError::SubdivisionOutOfRange { shape: "Cylinder", .. })
        ));
    }
}
