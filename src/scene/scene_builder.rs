//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling the cube's model transform and the camera.

use mm3d_math::{Mat4, Vec3};

use super::Scene;
use crate::config::AppConfig;

/// Builder for constructing a cube scene
///
/// # Example
/// ```
/// use mm3d::scene::SceneBuilder;
/// use mm3d_math::Vec3;
///
/// let scene = SceneBuilder::new()
///     .with_cube(1.0)
///     .with_position(Vec3::new(5.0, 5.0, 10.0))
///     .with_rotation_degrees(Vec3::new(0.0, 45.0, 0.0))
///     .with_scale(Vec3::new(2.0, 2.0, 2.0))
///     .build();
/// assert_eq!(scene.world_vertices().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    half_extent: f64,
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    fov_degrees: f64,
    aspect: f64,
    near: f64,
    far: f64,
    random_count: usize,
    random_seed: Option<u64>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Create a new scene builder with a unit cube at the origin
    pub fn new() -> Self {
        Self {
            half_extent: 1.0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::unit(),
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            aspect: 1.0,
            near: 0.01,
            far: 100.0,
            random_count: 0,
            random_seed: None,
        }
    }

    /// Create a builder populated from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let scene = &config.scene;
        let camera = &config.camera;
        Self::new()
            .with_cube(scene.cube_half_extent)
            .with_position(scene.position.into())
            .with_rotation_degrees(scene.rotation_degrees.into())
            .with_scale(scene.scale.into())
            .with_camera(camera.eye.into(), camera.target.into(), camera.up.into())
            .with_projection(camera.fov, camera.aspect, camera.near, camera.far)
            .with_random_points(config.random.count, config.random.seed)
    }

    /// Set the cube's half edge length
    pub fn with_cube(mut self, half_extent: f64) -> Self {
        self.half_extent = half_extent;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation about X, Y and Z in degrees
    pub fn with_rotation_degrees(mut self, degrees: Vec3) -> Self {
        self.rotation = Vec3::new(
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        );
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Place the camera at `eye` looking at `target`
    pub fn with_camera(mut self, eye: Vec3, target: Vec3, up: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self
    }

    /// Set the perspective projection (field of view in degrees)
    pub fn with_projection(mut self, fov_degrees: f64, aspect: f64, near: f64, far: f64) -> Self {
        self.fov_degrees = fov_degrees;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self
    }

    /// Draw `count` random points from the unit cube, seeded when `seed` is set
    pub fn with_random_points(mut self, count: usize, seed: Option<u64>) -> Self {
        self.random_count = count;
        self.random_seed = seed;
        self
    }

    /// Build the scene
    ///
    /// The model matrix is translation * rotation * scale, so points are
    /// scaled first, then rotated, then translated.
    pub fn build(self) -> Scene {
        let model = Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::rotation(self.rotation.x, self.rotation.y, self.rotation.z)
            * Mat4::scale(self.scale.x, self.scale.y, self.scale.z);
        let view = Mat4::look_at(self.eye, self.target, self.up);
        let projection = Mat4::perspective(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );

        log::debug!("Built scene: model={} view={} projection={}", model, view, projection);

        Scene::new(model, view, projection, self.half_extent)
            .with_random_points(self.random_count, self.random_seed)
    }
}
