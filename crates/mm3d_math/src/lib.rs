//! 3D Mathematics Library
//!
//! This crate provides the vector and matrix types used by mm3d.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 homogeneous transform matrix (row-major, column vectors)
//!
//! ## Dynamic dispatch
//!
//! - [`Operand`] - right-hand side of a matrix product chosen at runtime
//! - [`MathError`] - the error returned when that operand is not a vector or matrix

mod vec3;
pub mod mat4;
pub mod operand;
pub mod error;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use operand::{Operand, Product};
pub use error::MathError;
