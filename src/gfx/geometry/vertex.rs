//! # Vertex Data Structures
//!
//! This module defines the single interleaved vertex format shared by every
//! generator in the crate. It is GPU-compatible and matches the flat float
//! layout handed to renderers: `[x, y, z, u, v, nx, ny, nz]`.

/// Number of `f32` components in one [`Vertex`].
pub const FLOATS_PER_VERTEX: usize = 8;

/// A 3D vertex with position, texture coordinate and normal data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. Fields are laid out
/// back to back with no padding, so a `&[Vertex]` can be viewed as a
/// `&[f32]` of length `8 * n`.
///
/// # Examples
///
/// ```
/// use kessel::gfx::geometry::Vertex;
///
/// let vertex = Vertex::new([0.0, 1.0, 0.0], [0.5, 0.5], [0.0, 1.0, 0.0]);
/// assert_eq!(vertex.to_floats()[3..5], [0.5, 0.5]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position [x, y, z]
    pub position: [f32; 3],
    /// Texture coordinate [u, v], conventionally within [0, 1]
    pub tex_coords: [f32; 2],
    /// Unit normal [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], tex_coords: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            tex_coords,
            normal,
        }
    }

    /// Flattens the vertex into the interleaved 8-float layout.
    pub fn to_floats(&self) -> [f32; FLOATS_PER_VERTEX] {
        let [x, y, z] = self.position;
        let [u, v] = self.tex_coords;
        let [nx, ny, nz] = self.normal;
        [x, y, z, u, v, nx, ny, nz]
    }

    /// Length of the stored normal.
    pub fn normal_length(&self) -> f32 {
        let [nx, ny, nz] = self.normal;
        (nx * nx + ny * ny + nz * nz).sqrt()
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// # Returns
    ///
    /// A [`wgpu::VertexBufferLayout`] that describes:
    /// - Attribute 0: Position (Float32x3) at offset 0
    /// - Attribute 1: Texture coordinate (Float32x2) at offset 12
    /// - Attribute 2: Normal (Float32x3) at offset 20
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
