//! # Scene Manifest
//!
//! Which shapes the scene shows, where they sit, and where the point light is.
//! Building the scene generates every mesh up front; uploading and drawing
//! them is left to the renderer.

use anyhow::Context;
use cgmath::Vector3;

use crate::error::Result;
use crate::gfx::geometry::{
    generate_cube, tie_wing, Cylinder, HexFrustum, HexPrism, Mesh, UvSphere,
};
use crate::gfx::transform::Transform;

/// A shape together with its generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    HexPrism(HexPrism),
    HexFrustum(HexFrustum),
    Sphere(UvSphere),
    Cylinder(Cylinder),
    Cube { size: f32 },
    TieWing,
}

impl Shape {
    pub fn generate(&self) -> Result<Mesh> {
        match self {
            Shape::HexPrism(prism) => prism.generate(),
            Shape::HexFrustum(frustum) => frustum.generate(),
            Shape::Sphere(sphere) => sphere.generate(),
            Shape::Cylinder(cylinder) => cylinder.generate(),
            Shape::Cube { size } => generate_cube(*size),
            Shape::TieWing => Ok(tie_wing()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub shape: Shape,
    pub transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f32>,
}

/// A generated object, ready for upload.
#[derive(Debug, Clone)]
pub struct BuiltObject<'a> {
    pub name: &'a str,
    pub mesh: Mesh,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub light: PointLight,
    /// Object drawn at the light's position, if any
    light_marker: Option<usize>,
}

impl Scene {
    pub fn new(light: PointLight) -> Self {
        Self {
            objects: Vec::new(),
            light,
            light_marker: None,
        }
    }

    pub fn add_object(&mut self, name: &str, shape: Shape, transform: Transform) -> &mut Self {
        self.objects.push(SceneObject {
            name: name.to_owned(),
            shape,
            transform,
        });
        self
    }

    /// Adds a cube that follows the light when it moves.
    pub fn add_light_marker(&mut self, size: f32, scale: f32) -> &mut Self {
        let transform = Transform::at(self.light.position).with_scale(scale);
        self.add_object("light", Shape::Cube { size }, transform);
        self.light_marker = Some(self.objects.len() - 1);
        self
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Moves the point light, dragging its marker along.
    pub fn move_light(&mut self, delta: Vector3<f32>) {
        self.light.position += delta;
        if let Some(marker) = self.light_marker.and_then(|i| self.objects.get_mut(i)) {
            marker.transform.position += delta;
        }
    }

    /// The showcase row of primitives: a large sphere at the origin, a row of
    /// small shapes along x = -4, a tie wing beside the sphere, and a light
    /// cube at (5, 5, 5).
    pub fn showcase() -> Self {
        let mut scene = Self::new(PointLight {
            position: Vector3::new(5.0, 5.0, 5.0),
        });
        let small = 0.9;

        scene
            .add_object(
                "death_star",
                Shape::Sphere(UvSphere::default()),
                Transform::default().with_scale(2.5),
            )
            .add_object(
                "cube",
                Shape::Cube { size: 1.0 },
                Transform::at(Vector3::new(-4.0, -0.1, 2.5)).with_scale(small),
            )
            .add_object(
                "sphere",
                Shape::Sphere(UvSphere::default().with_radius(0.5)),
                Transform::at(Vector3::new(-4.0, -0.1, -1.5)).with_scale(small),
            )
            .add_object(
                "cylinder",
                Shape::Cylinder(Cylinder::new(0.5, 1.0, 36)),
                Transform::at(Vector3::new(-4.0, -0.1, -2.5))
                    .with_rotation(Vector3::new(1.0, 0.0, 0.0))
                    .with_scale(small),
            )
            .add_object(
                "hexagon",
                Shape::HexPrism(HexPrism::new(0.5, 1.0)),
                Transform::at(Vector3::new(-4.0, -0.1, -4.5))
                    .with_rotation(Vector3::new(0.0, 0.0, 1.0))
                    .with_scale(small),
            )
            .add_object(
                "hex_body",
                Shape::HexFrustum(HexFrustum::new(0.3, 0.5, 1.0)),
                Transform::at(Vector3::new(-4.0, -0.1, -6.5)).with_scale(small),
            )
            .add_object(
                "tie_wing",
                Shape::TieWing,
                Transform::at(Vector3::new(2.0, 0.0, -2.5)).with_scale(small),
            )
            .add_light_marker(1.0, 0.8);

        scene
    }

    /// Generates every object's mesh.
    pub fn build_meshes(&self) -> anyhow::Result<Vec<BuiltObject<'_>>> {
        self.objects
            .iter()
            .map(|object| {
                let mesh = object
                    .shape
                    .generate()
                    .with_context(|| format!("failed to generate mesh for '{}'", object.name))?;
                Ok(BuiltObject {
                    name: &object.name,
                    mesh,
                    transform: object.transform,
                })
            })
            .collect()
    }
}
