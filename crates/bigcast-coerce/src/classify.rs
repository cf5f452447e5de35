//! Integer-likeness classification and fraction construction.
//!
//! A source is integer-like when its own type can hold it as an exact
//! integer. Native floats are integer-like only inside the range of the
//! signed integer of the same width, so `2f64.powi(70)` is rejected even
//! though it is mathematically integral.

use bigcast_core::{Error, Integer, Rational, Result};
use num_traits::Zero;

use crate::coerce::rational_operand;
use crate::source::NumSource;

/// 2^63 as an `f64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// 2^31 as an `f32`.
const I32_LIMIT: f32 = 2_147_483_648.0;

/// Returns true if `x` is exactly an integer under its own type's rules.
///
/// - native integers and [`Integer`]: always
/// - [`Rational`]: denominator is 1
/// - [`Float`](bigcast_core::Float): no fractional part at its precision
/// - `f64`/`f32`: equal to its truncation and inside the `i64`/`i32` range
/// - literals: never
pub fn is_integer_like<'a>(x: impl Into<NumSource<'a>>) -> bool {
    match x.into() {
        NumSource::I8(_)
        | NumSource::I16(_)
        | NumSource::I32(_)
        | NumSource::I64(_)
        | NumSource::Isize(_)
        | NumSource::U8(_)
        | NumSource::U16(_)
        | NumSource::U32(_)
        | NumSource::U64(_)
        | NumSource::Usize(_)
        | NumSource::Integer(_) => true,
        NumSource::F32(v) => v.trunc() == v && (-I32_LIMIT..I32_LIMIT).contains(&v),
        NumSource::F64(v) => v.trunc() == v && (-I64_LIMIT..I64_LIMIT).contains(&v),
        NumSource::Rational(v) => v.is_integer(),
        NumSource::Float(v) => v.is_integer(),
        NumSource::Str(_) => false,
    }
}

/// Extracts the exact integer value of an integer-like source.
///
/// # Errors
///
/// Returns [`Error::NotAnInteger`] if [`is_integer_like`] is false for `x`.
#[allow(clippy::cast_possible_truncation)]
pub fn extract_integer<'a>(x: impl Into<NumSource<'a>>) -> Result<Integer> {
    let source = x.into();
    if !is_integer_like(source) {
        return Err(Error::NotAnInteger);
    }
    let value = match source {
        NumSource::I8(v) => Integer::from(v),
        NumSource::I16(v) => Integer::from(v),
        NumSource::I32(v) => Integer::from(v),
        NumSource::I64(v) => Integer::from(v),
        NumSource::Isize(v) => Integer::from(v),
        NumSource::U8(v) => Integer::from(v),
        NumSource::U16(v) => Integer::from(v),
        NumSource::U32(v) => Integer::from(v),
        NumSource::U64(v) => Integer::from(v),
        NumSource::Usize(v) => Integer::from(v),
        // In range and integral, so the casts are exact.
        NumSource::F32(v) => Integer::from(v as i32),
        NumSource::F64(v) => Integer::from(v as i64),
        NumSource::Integer(v) => v.clone(),
        NumSource::Rational(v) => v.to_integer().ok_or(Error::NotAnInteger)?,
        NumSource::Float(v) => v.to_integer_exact().ok_or(Error::NotAnInteger)?,
        NumSource::Str(_) => return Err(Error::NotAnInteger),
    };
    Ok(value)
}

/// Creates the rational `x / y`.
///
/// When both operands are integer-like the fraction is built directly from
/// their integer values; otherwise both are coerced to rationals and
/// divided. The two paths agree wherever both apply.
///
/// # Errors
///
/// - [`Error::DivisionByZero`] if `y` is zero
/// - any coercion error from [`to_rational`](crate::to_rational)
pub fn to_rat_frac<'a>(
    x: impl Into<NumSource<'a>>,
    y: impl Into<NumSource<'a>>,
) -> Result<Rational> {
    let (x, y) = (x.into(), y.into());
    if is_integer_like(x) && is_integer_like(y) {
        return Rational::try_new(extract_integer(x)?, extract_integer(y)?);
    }

    tracing::trace!(?x, ?y, "fraction operands not integer-like, dividing rationals");
    let numerator = rational_operand(x)?;
    let denominator = rational_operand(y)?;
    if denominator.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(&*numerator / &*denominator)
}

/// Overwrites `dest` with `x / y`. On error `dest` is left unchanged.
///
/// # Errors
///
/// See [`to_rat_frac`].
pub fn set_rat_frac<'a>(
    dest: &mut Rational,
    x: impl Into<NumSource<'a>>,
    y: impl Into<NumSource<'a>>,
) -> Result<()> {
    *dest = to_rat_frac(x, y)?;
    Ok(())
}
