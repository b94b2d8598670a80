//! Scalar helpers and a small dense matrix.

mod matrix;

pub use matrix::Matrix;

use thiserror::Error;

/// Linear interpolation: `a` at `w = 0`, `b` at `w = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, w: f32) -> f32 {
    a + (b - a) * w
}

/// Logistic function `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("matrix is {rows}x{cols}, operation needs a square matrix")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix has no elements")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn sigmoid_is_centred_on_half() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(10.0) > 0.9999);
        assert!(sigmoid(-10.0) < 0.0001);
    }
}
