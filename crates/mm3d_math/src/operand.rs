//! Runtime-typed operands for matrix products
//!
//! The `*` operators on [`Mat4`] only accept a [`Vec3`] or another [`Mat4`], so
//! a bad right-hand side is a compile error there. Callers whose operand type is
//! only known at runtime (a pipeline step read from data, say) go through
//! [`Mat4::apply`] with an [`Operand`] instead and get a [`MathError`] back.

use crate::{Mat4, MathError, Vec3};

/// Right-hand side of a dynamically dispatched matrix product
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vec3),
    Matrix(Mat4),
}

impl Operand {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Vector(_) => "Vec3",
            Operand::Matrix(_) => "Mat4",
        }
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<Vec3> for Operand {
    fn from(v: Vec3) -> Self {
        Operand::Vector(v)
    }
}

impl From<Mat4> for Operand {
    fn from(m: Mat4) -> Self {
        Operand::Matrix(m)
    }
}

/// Result of [`Mat4::apply`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Product {
    Vector(Vec3),
    Matrix(Mat4),
}

impl Product {
    pub fn as_vector(&self) -> Option<Vec3> {
        match self {
            Product::Vector(v) => Some(*v),
            Product::Matrix(_) => None,
        }
    }

    pub fn as_matrix(&self) -> Option<Mat4> {
        match self {
            Product::Matrix(m) => Some(*m),
            Product::Vector(_) => None,
        }
    }
}

impl Mat4 {
    /// Multiply by an operand whose type is only known at runtime
    ///
    /// Vectors are transformed as points (see [`Mat4::transform_point`]),
    /// matrices are composed as `self * rhs`. Anything else fails with
    /// [`MathError::InvalidOperand`].
    pub fn apply(&self, rhs: Operand) -> Result<Product, MathError> {
        match rhs {
            Operand::Vector(v) => Ok(Product::Vector(*self * v)),
            Operand::Matrix(m) => Ok(Product::Matrix(*self * m)),
            other => Err(MathError::InvalidOperand {
                lhs: "Mat4",
                rhs: other.kind(),
            }),
        }
    }
}
