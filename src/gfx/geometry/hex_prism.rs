//! # Hexagonal Prism
//!
//! A right prism with equal top and bottom radius. Caps are triangle fans and
//! the side is a band of quads whose normals point straight out from the axis.

use super::frustum::{revolve, MAX_SEGMENTS, MIN_SEGMENTS};
use super::Mesh;
use crate::error::{check_dimension, check_subdivision, Result};

/// Configuration for a right hexagonal prism centered at the origin, with its
/// axis along Y.
///
/// `segments` defaults to 6; any value in `3..=4096` gives a regular n-gon prism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexPrism {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for HexPrism {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            segments: 6,
        }
    }
}

impl HexPrism {
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius,
            height,
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Number of vertices the generated mesh will hold: two capped rings of
    /// `segments + 2` and a band of `segments + 1` vertex pairs.
    pub fn vertex_count(&self) -> usize {
        let s = self.segments as usize;
        2 * (s + 2) + 2 * (s + 1)
    }

    /// Number of indices the generated mesh will hold. The two cap fans
    /// contribute `3 * segments` each, the band `6 * segments`.
    pub fn index_count(&self) -> usize {
        12 * self.segments as usize
    }

    /// Number of indices in the lateral band alone.
    pub fn lateral_index_count(&self) -> usize {
        6 * self.segments as usize
    }

    /// Generates the prism mesh.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidDimension`](crate::error::MeshError::InvalidDimension)
    /// when `radius` or `height` is not a positive finite number, and
    /// [`MeshError::SubdivisionOutOfRange`](crate::error::MeshError::SubdivisionOutOfRange)
    /// when `segments` is outside `3..=4096`.
    pub fn generate(&self) -> Result<Mesh> {
        const SHAPE: &str = "HexPrism";
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

/// Generate a hexagonal prism with the default six segments
pub fn generate_hex_prism(radius: f32, height: f32) -> Result<Mesh> {
    HexPrism::new(radius, height).generate()
}
