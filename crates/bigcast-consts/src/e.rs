//! Euler's number.

use bigcast_core::Float;
use num_traits::One;

use crate::check_precision;

/// Returns `e` rounded to `precision` bits, as the exponential of one.
///
/// # Panics
///
/// Panics if `precision` is zero or not below
/// [`MAX_PRECISION`](bigcast_core::precision::MAX_PRECISION).
#[must_use]
#[tracing::instrument(level = "debug")]
pub fn e(precision: usize) -> Float {
    check_precision(precision);
    Float::one().with_precision(precision).exp()
}
