//! Complex-number helpers on top of `num_complex`.
//!
//! Addition, multiplication, magnitude, phase, conjugation, and the
//! exponential all come from [`Complex64`] itself. This module adds the
//! two things the engine needs beyond that: division that fails instead
//! of producing NaNs, and a tolerance comparison used throughout the
//! numeric code and its tests.

use num_complex::Complex64;

use crate::error::{SimError, SimResult};

/// Absolute tolerance used for amplitude comparisons.
pub const EPSILON: f64 = 1e-10;

/// Divide `a` by `b`, failing with [`SimError::DivisionByZero`] when `b`
/// has zero magnitude.
pub fn checked_div(a: Complex64, b: Complex64) -> SimResult<Complex64> {
    if b.norm_sqr() == 0.0 {
        return Err(SimError::DivisionByZero);
    }
    Ok(a / b)
}

/// Compare two complex numbers within [`EPSILON`].
pub fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < EPSILON
}

/// Compare two reals within [`EPSILON`].
pub fn approx_eq_f64(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
