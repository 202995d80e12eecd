//! # UV Sphere
//!
//! Latitude/longitude tessellation. Stacks sweep from the north pole
//! (`+π/2`) to the south pole (`-π/2`); sectors sweep once around the Y axis
//! with a duplicated seam column.

use std::f32::consts::{FRAC_PI_2, PI};

use super::{Mesh, Vertex};
use crate::error::{check_dimension, check_subdivision, Result};

pub const MIN_SECTORS: u32 = 3;
pub const MIN_STACKS: u32 = 2;
/// Upper bound for both sectors and stacks.
pub const MAX_SUBDIVISIONS: u32 = 4096;

/// Configuration for a UV sphere centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvSphere {
    pub radius: f32,
    /// Longitude subdivisions
    pub sectors: u32,
    /// Latitude subdivisions
    pub stacks: u32,
}

impl Default for UvSphere {
    fn default() -> Self {
        Self {
            radius: 1.0,
            sectors: 36,
            stacks: 18,
        }
    }
}

impl UvSphere {
    pub fn new(radius: f32, sectors: u32, stacks: u32) -> Self {
        Self {
            radius,
            sectors,
            stacks,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// `(stacks + 1) * (sectors + 1)`
    pub fn vertex_count(&self) -> usize {
        (self.stacks as usize + 1) * (self.sectors as usize + 1)
    }

    /// Each stack holds two triangles per sector, except the two pole stacks
    /// which hold one.
    pub fn triangle_count(&self) -> usize {
        2 * self.sectors as usize * (self.stacks as usize).saturating_sub(1)
    }

    pub fn generate(&self) -> Result<Mesh> {
        const SHAPE: &str = "UvSphere";
        let radius = check_dimension(SHAPE, "radius", self.radius)?;
        let sectors =
            check_subdivision(SHAPE, "sectors", self.sectors, MIN_SECTORS, MAX_SUBDIVISIONS)?;
        let stacks = check_subdivision(SHAPE, "stacks", self.stacks, MIN_STACKS, MAX_SUBDIVISIONS)?;

        let sector_step = 2.0 * PI / sectors as f32;
        let stack_step = PI / stacks as f32;
        let mut mesh = Mesh::with_capacity(self.vertex_count(), 3 * self.triangle_count());

        for i in 0..=stacks {
            let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
            let xy = radius * stack_angle.cos();
            let y = radius * stack_angle.sin();

            for j in 0..=sectors {
                let sector_angle = j as f32 * sector_step;
                let x = xy * sector_angle.cos();
                let z = xy * sector_angle.sin();

                let u = 1.0 - j as f32 / sectors as f32;
                let v = 1.0 - i as f32 / stacks as f32;

                mesh.push_vertex(Vertex::new(
                    [x, y, z],
                    [u, v],
                    [x / radius, y / radius, z / radius],
                ));
            }
        }

        mesh.extend_triangles(grid_triangles(sectors, stacks));

        log::debug!(
            "Generated {SHAPE} (r={radius}, sectors={sectors}, stacks={stacks}): {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );
        Ok(mesh)
    }
}

/// Generate a UV sphere with the given radius and resolution
pub fn generate_sphere(radius: f32, sectors: u32, stacks: u32) -> Result<Mesh> {
    UvSphere::new(radius, sectors, stacks).generate()
}

/// Triangles of the stack/sector grid.
///
/// The first stack collapses onto the north pole, so its upper triangle
/// `(k1, k2, k1 + 1)` would have zero area and is skipped; likewise the lower
/// triangle `(k1 + 1, k2, k2 + 1)` of the last stack at the south pole.
fn grid_triangles(sectors: u32, stacks: u32) -> impl Iterator<Item = [u32; 3]> {
    (0..stacks).flat_map(move |i| {
        (0..sectors).flat_map(move |j| {
            let k1 = i * (sectors + 1) + j;
            let k2 = k1 + sectors + 1;

            let upper = (i != 0).then_some([k1, k2, k1 + 1]);
            let lower = (i != stacks - 1).then_some([k1 + 1, k2, k2 + 1]);
            upper.into_iter().chain(lower)
        })
    })
}
