//! mm3d - 3D vector and matrix math with a headless cube transform demo
//!
//! The math types live in [`mm3d_math`]; this crate adds configuration loading
//! and the cube scene the `mm3d` binary renders to the log.

pub mod config;
pub mod scene;

pub use mm3d_math::{Mat4, MathError, Operand, Product, Vec3};
