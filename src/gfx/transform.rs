//! Placement of a mesh in the scene.
//!
//! A transform never touches vertex data; renderers combine it with a parent
//! matrix when drawing.

use cgmath::{Matrix4, SquareMatrix, Vector3};

/// Position, rotation and scale of a scene object.
///
/// `rotation` is kept with the object but is not part of
/// [`model_matrix`](Transform::model_matrix): the scene animates objects by
/// rotating their parent matrix instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 1.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vector3<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::new(scale, scale, scale);
        self
    }

    /// Set non-uniform scale
    pub fn with_scale_xyz(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// `parent * T(position) * S(scale)`: scale first, then translate, then
    /// whatever the parent applies.
    pub fn model_matrix(&self, parent: Matrix4<f32>) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        parent * t * s
    }

    /// Column-major model matrix relative to the world origin, ready for a
    /// uniform buffer.
    pub fn to_uniform(&self) -> [[f32; 4]; 4] {
        self.model_matrix(Matrix4::identity()).into()
    }
}
