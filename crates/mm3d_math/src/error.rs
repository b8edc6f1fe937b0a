//! Math error types

use std::fmt;

/// Error type for math operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A product was requested with an operand the left-hand side cannot multiply
    InvalidOperand {
        lhs: &'static str,
        rhs: &'static str,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidOperand { lhs, rhs } => {
                write!(f, "Invalid operand: can't multiply {} with {}", lhs, rhs)
            }
        }
    }
}

impl std::error::Error for MathError {}
