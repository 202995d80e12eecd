//! # GPU Mesh Resources
//!
//! The device-resident side of a [`Mesh`]: vertex and index buffers created
//! once from finished geometry, and a draw extension for render passes.
//! Generation never touches these types, so meshes can be built and tested
//! without a graphics context.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::gfx::geometry::{Mesh, Vertex};

/// Front-face winding of every mesh produced by this crate.
///
/// Outward faces are wound clockwise when viewed from outside in a
/// right-handed, Y-up frame, which is how they reach the rasterizer after a
/// standard right-handed view/projection.
pub const FRONT_FACE: wgpu::FrontFace = wgpu::FrontFace::Cw;

/// Primitive state for drawing generated meshes: an indexed triangle list
/// with back faces culled.
pub fn primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: FRONT_FACE,
        cull_mode: Some(wgpu::Face::Back),
        ..Default::default()
    }
}

/// Vertex and index buffers for one uploaded mesh.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    /// Uploads a finished mesh into device memory.
    ///
    /// The buffers are immutable: reshaping an object means generating and
    /// uploading a new mesh.
    pub fn upload(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Uploaded mesh '{label}': {} vertices ({} bytes), {} indices ({} bytes)",
            mesh.vertex_count(),
            mesh.vertex_count() * std::mem::size_of::<Vertex>(),
            mesh.index_count(),
            mesh.index_bytes().len()
        );

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }
}

pub trait DrawMesh {
    fn draw_mesh(&mut self, mesh: &GpuMesh);
    fn draw_mesh_instanced(&mut self, mesh: &GpuMesh, instances: Range<u32>);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &GpuMesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &GpuMesh, instances: Range<u32>) {
        if mesh.index_count == 0 {
            return;
        }
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }
}
