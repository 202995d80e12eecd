//! # Mesh Errors
//!
//! Every generator validates its shape parameters before emitting any geometry.
//! Parameters that would produce an empty or degenerate mesh are reported here
//! instead of being silently accepted.

/// Errors produced while generating or assembling a [`Mesh`](crate::gfx::geometry::Mesh).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A length parameter (radius, height, size) is zero, negative, or not finite
    #[error("{shape}: {parameter} must be a finite value greater than zero, got {value}")]
    InvalidDimension {
        shape: &'static str,
        parameter: &'static str,
        value: f32,
    },

    /// A subdivision count (segments, sectors, stacks) is outside its valid range
    #[error("{shape}: {parameter} must be within {min}..={max}, got {value}")]
    SubdivisionOutOfRange {
        shape: &'static str,
        parameter: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A triangle names a vertex that does not exist
    #[error("triangle {triangle} references vertex {index}, but the mesh only has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// The index buffer does not split evenly into triangles
    #[error("index buffer length {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },

    /// Interleaved vertex data does not split evenly into 8-float vertices
    #[error("vertex buffer length {len} is not a multiple of the 8-float vertex stride")]
    MisalignedVertexData { len: usize },
}

/// Convenience alias used throughout the geometry module
pub type Result<T> = std::result::Result<T, MeshError>;

/// Checks that a length parameter is finite and strictly positive.
pub(crate) fn check_dimension(shape: &'static str, parameter: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::InvalidDimension {
            shape,
            parameter,
            value,
        })
    }
}

/// Checks that a subdivision count lies within `min..=max`.
pub(crate) fn check_subdivision(
    shape: &'static str,
    parameter: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(MeshError::SubdivisionOutOfRange {
            shape,
            parameter,
            value,
            min,
            max,
        })
    }
}
