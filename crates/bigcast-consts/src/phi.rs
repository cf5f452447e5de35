//! The golden ratio.

use bigcast_core::precision::MAX_PRECISION;
use bigcast_core::{Float, Integer};
use num_traits::One;

use crate::check_precision;

/// Bits carried past the requested precision before the final rounding.
const GUARD_BITS: usize = 4;

/// Returns `(1 + √5) / 2` rounded to `precision` bits.
///
/// # Panics
///
/// Panics if `precision` is zero or not below
/// [`MAX_PRECISION`](bigcast_core::precision::MAX_PRECISION).
#[must_use]
#[tracing::instrument(level = "debug")]
pub fn phi(precision: usize) -> Float {
    check_precision(precision);
    let working = (precision + GUARD_BITS).min(MAX_PRECISION);
    tracing::debug!(working, "computing golden ratio");

    let root = Float::from_integer(&Integer::new(5), working).sqrt();
    let one = Float::one().with_precision(working);
    (&one + &root).mul_pow2(-1).with_precision(precision)
}
