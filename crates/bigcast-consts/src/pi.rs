//! Pi by the Gauss–Legendre algorithm.

use bigcast_core::precision::{ceil_log2, floor_log2, MAX_PRECISION};
use bigcast_core::{Float, Rational};
use num_traits::One;

use crate::check_precision;

/// Extra bits carried through the iteration on top of `log2(precision)`.
const GUARD_BITS: usize = 32;

/// Additional iterations past `ceil(log2(precision))`.
const EXTRA_ITERATIONS: usize = 5;

/// Returns pi rounded to `precision` bits.
///
/// Each Gauss–Legendre step doubles the number of correct digits, so the
/// loop runs `ceil(log2(precision)) + 5` times at a working precision of
/// `precision + floor(log2(precision)) + 32` bits.
///
/// # Panics
///
/// Panics if `precision` is zero or not below
/// [`MAX_PRECISION`](bigcast_core::precision::MAX_PRECISION).
#[must_use]
#[tracing::instrument(level = "debug")]
pub fn pi(precision: usize) -> Float {
    check_precision(precision);
    let working = precision
        .saturating_add(floor_log2(precision))
        .saturating_add(GUARD_BITS)
        .min(MAX_PRECISION);
    let iterations = ceil_log2(precision) + EXTRA_ITERATIONS;
    tracing::debug!(working, iterations, "starting Gauss-Legendre iteration");

    let mut a = Float::one().with_precision(working);
    let mut b = Float::from_rational(&Rational::from_i64(1, 2), working).sqrt();
    let mut t = Float::from_rational(&Rational::from_i64(1, 4), working);
    // p = 2^k
    let mut k = 0isize;

    for _ in 0..iterations {
        let next_a = (&a + &b).mul_pow2(-1);
        b = (&a * &b).sqrt();
        // t is updated from the a of this step, not the next one.
        let delta = &a - &next_a;
        t = &t - &(&delta * &delta).mul_pow2(k);
        k += 1;
        a = next_a;
    }

    let sum = &a + &b;
    let value = &(&sum * &sum) / &t.mul_pow2(2);
    value.with_precision(precision)
}
