//! The cube scene: model, view and projection transforms applied to a cube

use mm3d_math::{Mat4, MathError, Operand, Product, Vec3};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::AppConfig;
use super::SceneBuilder;

/// The 8 corners of an axis-aligned cube centred on the origin
///
/// Front face (z = +h) clockwise from top-left, then the back face in the same order.
pub fn cube_vertices(half_extent: f64) -> [Vec3; 8] {
    let h = half_extent;
    [
        Vec3::new(-h, h, h),
        Vec3::new(h, h, h),
        Vec3::new(h, -h, h),
        Vec3::new(-h, -h, h),
        Vec3::new(-h, h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(-h, -h, -h),
    ]
}

/// A cube with its model transform and a camera
#[derive(Debug, Clone)]
pub struct Scene {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    half_extent: f64,
    random_count: usize,
    random_seed: Option<u64>,
}

impl Scene {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, half_extent: f64) -> Self {
        Self {
            model,
            view,
            projection,
            half_extent,
            random_count: 0,
            random_seed: None,
        }
    }

    /// Build the scene described by `config`
    pub fn from_config(config: &AppConfig) -> Self {
        SceneBuilder::from_config(config).build()
    }

    pub fn with_random_points(mut self, count: usize, seed: Option<u64>) -> Self {
        self.random_count = count;
        self.random_seed = seed;
        self
    }

    #[inline]
    pub fn model(&self) -> Mat4 {
        self.model
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// projection * view * model
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    /// Cube corners in model space
    pub fn local_vertices(&self) -> [Vec3; 8] {
        cube_vertices(self.half_extent)
    }

    /// Cube corners after the model transform
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.local_vertices()
            .iter()
            .map(|&v| self.model * v)
            .collect()
    }

    /// Cube corners in normalized device coordinates (after the w divide)
    pub fn clip_vertices(&self) -> Vec<Vec3> {
        let mvp = self.model_view_projection();
        self.local_vertices()
            .iter()
            .map(|&v| mvp.project_point(v))
            .collect()
    }

    /// Random points from the unit cube, reproducible when a seed is configured
    pub fn jitter_points(&self) -> Vec<Vec3> {
        match self.random_seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..self.random_count)
                    .map(|_| Vec3::random_with(&mut rng))
                    .collect()
            }
            None => (0..self.random_count).map(|_| Vec3::random()).collect(),
        }
    }

    /// Multiply the model matrix by an operand chosen at runtime
    pub fn apply_dynamic(&self, rhs: Operand) -> Result<Product, MathError> {
        self.model.apply(rhs)
    }
}
