//! Float operations over coercible operands.
//!
//! Binary operations round to the larger operand precision. Unary
//! operations keep the precision of their operand. Infinite operands are
//! accepted by the sign, comparison and precision operations; arithmetic
//! and the transcendental functions report them as [`Error::NotFinite`].

use std::borrow::Cow;
use std::cmp::Ordering;

use bigcast_coerce::{float_operand, NumSource};
use bigcast_core::precision::MAX_PRECISION;
use bigcast_core::{Error, Float, Result};
use num_traits::Zero;

/// Returns `x + y`.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if an operand is infinite, or any coercion
/// error of the operands.
pub fn add_float<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Float> {
    let (x, y) = (finite_operand(x)?, finite_operand(y)?);
    Ok(&*x + &*y)
}

/// Returns `x - y`.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if an operand is infinite, or any coercion
/// error of the operands.
pub fn sub_float<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Float> {
    let (x, y) = (finite_operand(x)?, finite_operand(y)?);
    Ok(&*x - &*y)
}

/// Returns `x * y`.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if an operand is infinite, or any coercion
/// error of the operands.
pub fn mul_float<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Float> {
    let (x, y) = (finite_operand(x)?, finite_operand(y)?);
    Ok(&*x * &*y)
}

/// Returns `x / y`.
///
/// # Errors
///
/// - [`Error::DivisionByZero`] if `y` is zero
/// - [`Error::NotFinite`] if an operand is infinite
pub fn quo_float<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Float> {
    let (x, y) = (finite_operand(x)?, finite_operand(y)?);
    if y.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(&*x / &*y)
}

/// Returns `|x|`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn abs_float<'a>(x: impl Into<NumSource<'a>>) -> Result<Float> {
    Ok(float_operand(x)?.abs())
}

/// Returns `-x`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn neg_float<'a>(x: impl Into<NumSource<'a>>) -> Result<Float> {
    Ok(-&*float_operand(x)?)
}

/// Compares `x` and `y` by value, ignoring precision.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn cmp_float<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Ordering> {
    let (x, y) = (float_operand(x)?, float_operand(y)?);
    Ok(x.cmp(&y))
}

/// Returns `√x`.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if `x` is infinite, or any coercion error of
/// the operand.
///
/// # Panics
///
/// Panics if `x` is negative.
pub fn sqrt_float<'a>(x: impl Into<NumSource<'a>>) -> Result<Float> {
    Ok(finite_operand(x)?.sqrt())
}

/// Returns `x` rounded (or widened) to `precision` bits.
///
/// # Errors
///
/// Returns any coercion error of the operand.
///
/// # Panics
///
/// Panics if `precision` is zero or not below
/// [`MAX_PRECISION`](bigcast_core::precision::MAX_PRECISION).
pub fn set_prec_float<'a>(x: impl Into<NumSource<'a>>, precision: usize) -> Result<Float> {
    assert!(
        precision > 0 && precision < MAX_PRECISION,
        "precision {precision} out of range"
    );
    Ok(float_operand(x)?.into_owned().with_precision(precision))
}

/// Returns `mant · 2^exp` at the precision of `mant`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn set_mant_exp_float<'a>(mant: impl Into<NumSource<'a>>, exp: isize) -> Result<Float> {
    Ok(float_operand(mant)?.mul_pow2(exp))
}

/// Returns `x^y` at the precision of `x`.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if an operand is infinite, or any coercion
/// error of the operands.
///
/// # Panics
///
/// Panics if `x` is negative.
pub fn pow_float<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Float> {
    let (x, y) = (finite_operand(x)?, finite_operand(y)?);
    Ok(x.powf(&y))
}

/// Returns the natural logarithm of `x`. The logarithm of zero is
/// negative infinity.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if `x` is infinite, or any coercion error of
/// the operand.
///
/// # Panics
///
/// Panics if `x` is negative.
pub fn log_float<'a>(x: impl Into<NumSource<'a>>) -> Result<Float> {
    Ok(finite_operand(x)?.ln())
}

/// Returns `e^x`.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if `x` is infinite, or any coercion error of
/// the operand.
pub fn exp_float<'a>(x: impl Into<NumSource<'a>>) -> Result<Float> {
    Ok(finite_operand(x)?.exp())
}

/// Returns the logarithm of `a` in base `b`, as `ln a / ln b`.
///
/// # Errors
///
/// - [`Error::DivisionByZero`] if `b` is one
/// - [`Error::NotFinite`] if either operand is zero or infinite
///
/// # Panics
///
/// Panics if either operand is negative.
pub fn log_base_float<'a>(
    a: impl Into<NumSource<'a>>,
    b: impl Into<NumSource<'a>>,
) -> Result<Float> {
    quo_float(&log_float(a)?, &log_float(b)?)
}

/// Returns `x * y + z` with a single rounding.
///
/// The product and sum are computed exactly and rounded once to the
/// largest operand precision.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] if any operand is infinite.
pub fn fma_float<'a>(
    x: impl Into<NumSource<'a>>,
    y: impl Into<NumSource<'a>>,
    z: impl Into<NumSource<'a>>,
) -> Result<Float> {
    let (x, y, z) = (finite_operand(x)?, finite_operand(y)?, finite_operand(z)?);
    let precision = x.precision().max(y.precision()).max(z.precision());
    let exact = &x.to_rational()? * &y.to_rational()? + &z.to_rational()?;
    Ok(Float::from_rational(&exact, precision))
}

fn finite_operand<'a>(x: impl Into<NumSource<'a>>) -> Result<Cow<'a, Float>> {
    let x = float_operand(x)?;
    if x.is_infinite() {
        return Err(Error::NotFinite);
    }
    Ok(x)
}
