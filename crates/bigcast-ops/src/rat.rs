//! Exact rational operations over coercible operands.

use std::cmp::Ordering;

use bigcast_coerce::{rational_operand, NumSource};
use bigcast_core::{Error, Rational, Result};
use num_traits::Zero;

/// Returns `x + y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn add_rat<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Rational> {
    let (x, y) = (rational_operand(x)?, rational_operand(y)?);
    Ok(&*x + &*y)
}

/// Returns `x - y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn sub_rat<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Rational> {
    let (x, y) = (rational_operand(x)?, rational_operand(y)?);
    Ok(&*x - &*y)
}

/// Returns `x * y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn mul_rat<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Rational> {
    let (x, y) = (rational_operand(x)?, rational_operand(y)?);
    Ok(&*x * &*y)
}

/// Returns `x / y`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `y` is zero.
pub fn quo_rat<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Rational> {
    let (x, y) = (rational_operand(x)?, rational_operand(y)?);
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
pub fn abs_rat<'a>(x: impl Into<NumSource<'a>>) -> Result<Rational> {
    Ok(rational_operand(x)?.abs())
}

/// Returns `-x`.
///
/// # Errors
///
/// Returns any coercion error of the operand.
pub fn neg_rat<'a>(x: impl Into<NumSource<'a>>) -> Result<Rational> {
    Ok(-&*rational_operand(x)?)
}

/// Returns `1 / x`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `x` is zero.
pub fn inv_rat<'a>(x: impl Into<NumSource<'a>>) -> Result<Rational> {
    rational_operand(x)?.recip()
}

/// Compares `x` and `y`.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn cmp_rat<'a>(x: impl Into<NumSource<'a>>, y: impl Into<NumSource<'a>>) -> Result<Ordering> {
    let (x, y) = (rational_operand(x)?, rational_operand(y)?);
    Ok(x.cmp(&y))
}

/// Returns `x * y + z` exactly.
///
/// # Errors
///
/// Returns any coercion error of the operands.
pub fn fma_rat<'a>(
    x: impl Into<NumSource<'a>>,
    y: impl Into<NumSource<'a>>,
    z: impl Into<NumSource<'a>>,
) -> Result<Rational> {
    let (x, y, z) = (rational_operand(x)?, rational_operand(y)?, rational_operand(z)?);
    Ok(&*x * &*y + &*z)
}
