//! Scene construction utilities
//!
//! This module builds the cube demo scene: a model transform for a cube plus the
//! camera's view and projection matrices.

mod cube_scene;
mod scene_builder;

pub use cube_scene::{cube_vertices, Scene};
pub use scene_builder::SceneBuilder;
