//! # Procedural Geometry Generation
//!
//! This module generates the solids of the scene procedurally: hexagonal
//! prisms, tapered hexagonal frustums, UV spheres, cylinders and cubes, plus
//! the hand-authored tie fighter wing.
//!
//! ## Supported Primitives
//!
//! - **HexPrism**: right prism with equal top and bottom radius, six segments by default
//! - **HexFrustum**: tapered prism with independent radii and slanted lateral normals
//! - **UvSphere**: stack/sector sphere with degenerate pole triangles omitted
//! - **Cylinder**: a many-segment frustum with equal radii
//! - **Cube**: axis-aligned cube with per-face normals
//! - **Tie wing**: static wedge-shaped wing panel
//!
//! Every generator validates its parameters and returns a [`Mesh`] in the shared
//! [`Vertex`] layout, with all triangles wound the same way.
//!
//! ## Usage
//!
//! ```
//! use kessel::gfx::geometry::{HexFrustum, HexPrism, UvSphere};
//!
//! let prism = HexPrism::new(1.0, 2.0).generate()?;
//! assert_eq!(prism.vertex_count(), 30);
//!
//! let frustum = HexFrustum::new(0.3, 0.6, 1.0).with_segments(8).generate()?;
//! assert_eq!(frustum.triangle_count(), 32);
//!
//! let sphere = UvSphere::new(2.0, 4, 2).generate()?;
//! assert_eq!(sphere.triangle_count(), 8);
//! # Ok::<(), kessel::error::MeshError>(())
//! ```

pub mod frustum;
pub mod hex_prism;
pub mod primitives;
pub mod sphere;
pub mod tie_wing;
pub mod triangulate;
pub mod vertex;

pub use frustum::{generate_hex_frustum, HexFrustum};
pub use hex_prism::{generate_hex_prism, HexPrism};
pub use primitives::{generate_cube, generate_cylinder, Cylinder};
pub use sphere::{generate_sphere, UvSphere};
pub use tie_wing::tie_wing;
pub use vertex::{Vertex, FLOATS_PER_VERTEX};

use cgmath::{InnerSpace, Vector3};

use crate::error::{MeshError, Result};

/// Generated geometry ready for GPU upload.
///
/// Index `i` always refers to the `i`-th inserted vertex, and indices come in
/// runs of three, one run per triangle. The mesh is read-only once built;
/// generators are the only code that appends to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    pub(crate) fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Builds a mesh from caller-supplied data, checking every index.
    pub fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self> {
        let mesh = Self { vertices, indices };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Builds a mesh from a flat `[x, y, z, u, v, nx, ny, nz, ...]` buffer.
    pub fn from_interleaved(floats: &[f32], indices: Vec<u32>) -> Result<Self> {
        if floats.len() % FLOATS_PER_VERTEX != 0 {
            return Err(MeshError::MisalignedVertexData { len: floats.len() });
        }

        let vertices = floats
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(|v| Vertex::new([v[0], v[1], v[2]], [v[3], v[4]], [v[5], v[6], v[7]]))
            .collect();

        Self::from_parts(vertices, indices)
    }

    /// Appends a vertex and returns its index.
    pub(crate) fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.next_index();
        self.vertices.push(vertex);
        index
    }

    /// Index the next pushed vertex will receive.
    pub(crate) fn next_index(&self) -> u32 {
        // Generators cap their subdivision counts well below u32::MAX vertices
        self.vertices.len() as u32
    }

    pub(crate) fn extend_triangles(&mut self, triangles: impl IntoIterator<Item = [u32; 3]>) {
        for triangle in triangles {
            self.indices.extend_from_slice(&triangle);
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices in this mesh
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// The interleaved vertex buffer, 8 floats per vertex.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Checks that the index buffer forms whole triangles over existing vertices.
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                len: self.indices.len(),
            });
        }

        let vertex_count = self.vertices.len();
        for (position, &index) in self.indices.iter().enumerate() {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    triangle: position / 3,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }

    /// Returns the same mesh with every triangle's winding flipped.
    pub fn reversed_winding(mut self) -> Self {
        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
        self
    }

    /// Geometric normal of a triangle, following the right-hand rule over its
    /// index order. `None` for a missing or zero-area triangle.
    pub fn face_normal(&self, triangle: usize) -> Option<Vector3<f32>> {
        let [a, b, c] = self.triangles().nth(triangle)?.map(|i| {
            self.vertices
                .get(i as usize)
                .map(|v| Vector3::from(v.position))
        });
        let (a, b, c) = (a?, b?, c?);

        let cross = (b - a).cross(c - a);
        if cross.magnitude2() <= f32::EPSILON * f32::EPSILON {
            return None;
        }
        Some(cross.normalize())
    }

    /// Consumes the mesh, returning its vertex and index buffers.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const NORMAL_TOLERANCE: f32 = 1e-3;

    pub(crate) fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Asserts that every index is in range and every normal is unit length.
    pub(crate) fn assert_well_formed(mesh: &Mesh) {
        assert!(mesh.validate().is_ok(), "{:?}", mesh.validate());
        for (i, vertex) in mesh.vertices().iter().enumerate() {
            let length = vertex.normal_length();
            assert!(
                (length - 1.0).abs() < NORMAL_TOLERANCE,
                "vertex {i} has normal length {length}"
            );
        }
    }

    /// Asserts that every non-degenerate triangle is wound clockwise when seen
    /// from the side its vertex normals point to.
    pub(crate) fn assert_outward_clockwise(mesh: &Mesh) {
        for (i, triangle) in mesh.triangles().enumerate() {
            let Some(face) = mesh.face_normal(i) else {
                continue;
            };
            let shading: Vector3<f32> = triangle
                .iter()
                .map(|&v| Vector3::from(mesh.vertices()[v as usize].normal))
                .fold(Vector3::new(0.0, 0.0, 0.0), |acc, n| acc + n);
            assert!(
                face.dot(shading) < 0.0,
                "triangle {i} {triangle:?} is wound against the others"
            );
        }
    }

    fn quad() -> (Vec<Vertex>, Vec<u32>) {
        let n = [0.0, 0.0, 1.0];
        let vertices = vec![
            Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0], n),
            Vertex::new([1.0, 0.0, 0.0], [1.0, 0.0], n),
            Vertex::new([1.0, 1.0, 0.0], [1.0, 1.0], n),
            Vertex::new([0.0, 1.0, 0.0], [0.0, 1.0], n),
        ];
        (vertices, vec![0, 1, 2, 2, 3, 0])
    }

    #[test]
    fn test_from_parts_accepts_valid_mesh() {
        let (vertices, indices) = quad();
        let mesh = Mesh::from_parts(vertices, indices).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [2, 3, 0]]);
    }

    #[test]
    fn test_from_parts_rejects_out_of_range_index() {
        let (vertices, _) = quad();
        let err = Mesh::from_parts(vertices, vec![0, 1, 2, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                triangle: 1,
                index: 4,
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_from_parts_rejects_partial_triangle() {
        let (vertices, _) = quad();
        let err = Mesh::from_parts(vertices, vec![0, 1, 2, 3]).unwrap_err();
        assert_eq!(err, MeshError::IncompleteTriangle { len: 4 });
    }

    #[test]
    fn test_interleaved_round_trip() {
        let (vertices, indices) = quad();
        let mesh = Mesh::from_parts(vertices, indices.clone()).unwrap();
        assert_eq!(mesh.as_floats().len(), 4 * FLOATS_PER_VERTEX);
        assert_eq!(&mesh.as_floats()[8..16], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let rebuilt = Mesh::from_interleaved(mesh.as_floats(), indices).unwrap();
        assert_eq!(rebuilt, mesh);
        assert_eq!(mesh.vertex_bytes().len(), 4 * 32);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_from_interleaved_rejects_partial_vertex() {
        let err = Mesh::from_interleaved(&[0.0; 12], vec![]).unwrap_err();
        assert_eq!(err, MeshError::MisalignedVertexData { len: 12 });
    }

    #[test]
    fn test_face_normal_and_reversal() {
        let (vertices, indices) = quad();
        let mesh = Mesh::from_parts(vertices, indices).unwrap();
        let normal = mesh.face_normal(0).unwrap();
        assert!((normal.z - 1.0).abs() < 1e-6);
        assert!(mesh.face_normal(2).is_none());

        let flipped = mesh.reversed_winding();
        assert_eq!(flipped.indices(), &[0, 2, 1, 2, 0, 3]);
        assert!((flipped.face_normal(0).unwrap().z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_normal_out_of_range_triangle() {
        let (vertices, indices) = quad();
        let mesh = Mesh::from_parts(vertices, indices).unwrap();
        assert!(mesh.face_normal(usize::MAX / 3).is_none());
        assert!(mesh.face_normal(usize::MAX / 2).is_none());
        assert!(mesh.face_normal(usize::MAX).is_none());

        let prism = generate_hex_prism(1.0, 1.0).unwrap();
        assert!(prism.face_normal(prism.triangle_count() - 1).is_some());
        assert!(prism.face_normal(prism.triangle_count()).is_none());
        assert!(prism.face_normal(usize::MAX / 2).is_none());
    }

    #[test]
    fn test_face_normal_skips_degenerate_triangle() {
        let n = [0.0, 1.0, 0.0];
        let point = Vertex::new([0.0, 1.0, 0.0], [0.5, 0.5], n);
        let mesh = Mesh::from_parts(vec![point; 3], vec![0, 1, 2]).unwrap();
        assert!(mesh.face_normal(0).is_none());
    }
}
