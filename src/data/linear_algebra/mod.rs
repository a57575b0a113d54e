//! # Linear algebra primitives
//!
//! A dense matrix and the floating point tolerance used for every sign and zero test.

pub mod matrix;

/// Values with an absolute value below this number are treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Whether a value is zero, up to `EPSILON`.
pub fn is_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Whether a value is strictly negative, beyond `EPSILON`.
pub fn is_negative(value: f64) -> bool {
    value < -EPSILON
}

/// Whether a value is strictly positive, beyond `EPSILON`.
pub fn is_positive(value: f64) -> bool {
    value > EPSILON
}
