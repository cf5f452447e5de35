//! Precision constants and defaulting rules for [`Float`](crate::Float).
//!
//! A float created from a native value takes the width of that value's
//! type; one created from an arbitrary-size value takes enough bits to hold
//! it exactly, but never fewer than [`DEFAULT_PRECISION`].

/// Precision given to floats whose source carries no width of its own.
pub const DEFAULT_PRECISION: usize = 64;

/// Upper bound (exclusive) on any requested precision.
pub const MAX_PRECISION: usize = u32::MAX as usize;

/// Precision for a float built from a native `f64`.
pub const F64_PRECISION: usize = f64::MANTISSA_DIGITS as usize;

/// Precision for a float built from a native `f32`.
pub const F32_PRECISION: usize = 32;

/// Precision needed to hold an integer of `bit_len` bits, at least
/// [`DEFAULT_PRECISION`].
#[must_use]
pub fn for_bit_len(bit_len: usize) -> usize {
    bit_len.clamp(DEFAULT_PRECISION, MAX_PRECISION - 1)
}

/// Precision needed to hold the numerator and denominator of `value`, at
/// least [`DEFAULT_PRECISION`].
#[must_use]
pub fn for_rational(value: &crate::Rational) -> usize {
    let bits = value
        .numerator()
        .bit_len()
        .max(value.denominator().bit_len());
    for_bit_len(bits)
}

/// Precision matching a decimal literal with `digits` significant digits.
///
/// Each decimal digit carries log2(10) < 3.3220 bits.
#[must_use]
pub fn for_decimal_digits(digits: usize) -> usize {
    for_bit_len(digits.saturating_mul(33_220) / 10_000 + 1)
}

/// Returns `floor(log2(n))` for `n > 0`.
#[must_use]
pub fn floor_log2(n: usize) -> usize {
    debug_assert!(n > 0);
    (usize::BITS - 1 - n.leading_zeros()) as usize
}

/// Returns `ceil(log2(n))` for `n > 0`.
#[must_use]
pub fn ceil_log2(n: usize) -> usize {
    debug_assert!(n > 0);
    if n.is_power_of_two() {
        floor_log2(n)
    } else {
        floor_log2(n) + 1
    }
}
