//! Coercion of source scalars into canonical values.
//!
//! Each family has a constructor (`to_*`), an in-place setter (`set_*`)
//! and a borrowing accessor (`*_operand`) that avoids copying a value that
//! is already canonical.
//!
//! Float precision follows the source: native values take their type's
//! width (`f64` takes its 53 significand bits), arbitrary-size values take
//! enough bits to be exact but never fewer than
//! [`DEFAULT_PRECISION`](bigcast_core::precision::DEFAULT_PRECISION), and
//! literals take the bit equivalent of their significant digits.

use std::borrow::Cow;

use bigcast_core::precision::{self, F32_PRECISION};
use bigcast_core::{Float, Integer, Rational, Result};

use crate::source::{IntSource, NumSource};

/// Creates a new integer from `x`.
///
/// # Errors
///
/// Returns [`Error::Parse`](bigcast_core::Error::Parse) if `x` is a string
/// that is not an integer literal.
pub fn to_integer<'a>(x: impl Into<IntSource<'a>>) -> Result<Integer> {
    integer_operand(x).map(Cow::into_owned)
}

/// Overwrites `dest` with `x`. On error `dest` is left unchanged.
///
/// # Errors
///
/// See [`to_integer`].
pub fn set_integer<'a>(dest: &mut Integer, x: impl Into<IntSource<'a>>) -> Result<()> {
    match integer_operand(x)? {
        Cow::Borrowed(value) => dest.clone_from(value),
        Cow::Owned(value) => *dest = value,
    }
    Ok(())
}

/// Coerces `x`, borrowing it if it is already an [`Integer`].
///
/// # Errors
///
/// See [`to_integer`].
pub fn integer_operand<'a>(x: impl Into<IntSource<'a>>) -> Result<Cow<'a, Integer>> {
    let value = match x.into() {
        IntSource::I8(v) => Integer::from(v),
        IntSource::I16(v) => Integer::from(v),
        IntSource::I32(v) => Integer::from(v),
        IntSource::I64(v) => Integer::from(v),
        IntSource::Isize(v) => Integer::from(v),
        IntSource::U8(v) => Integer::from(v),
        IntSource::U16(v) => Integer::from(v),
        IntSource::U32(v) => Integer::from(v),
        IntSource::U64(v) => Integer::from(v),
        IntSource::Usize(v) => Integer::from(v),
        IntSource::Integer(v) => return Ok(Cow::Borrowed(v)),
        IntSource::Str(s) => Integer::from_literal(s).inspect_err(|err| {
            tracing::debug!(input = s, %err, "integer coercion failed");
        })?,
        IntSource::Bytes(bytes) => Integer::from_be_bytes(bytes),
        IntSource::Words(words) => Integer::from_words(words),
    };
    Ok(Cow::Owned(value))
}

/// Creates a new rational from `x`.
///
/// Native floats and [`Float`]s convert exactly.
///
/// # Errors
///
/// - [`Error::Parse`](bigcast_core::Error::Parse) for an invalid literal
/// - [`Error::NotFinite`](bigcast_core::Error::NotFinite) for an infinity
/// - [`Error::NotANumber`](bigcast_core::Error::NotANumber) for NaN
pub fn to_rational<'a>(x: impl Into<NumSource<'a>>) -> Result<Rational> {
    rational_operand(x).map(Cow::into_owned)
}

/// Overwrites `dest` with `x`. On error `dest` is left unchanged.
///
/// # Errors
///
/// See [`to_rational`].
pub fn set_rational<'a>(dest: &mut Rational, x: impl Into<NumSource<'a>>) -> Result<()> {
    match rational_operand(x)? {
        Cow::Borrowed(value) => dest.clone_from(value),
        Cow::Owned(value) => *dest = value,
    }
    Ok(())
}

/// Coerces `x`, borrowing it if it is already a [`Rational`].
///
/// # Errors
///
/// See [`to_rational`].
pub fn rational_operand<'a>(x: impl Into<NumSource<'a>>) -> Result<Cow<'a, Rational>> {
    let value = match x.into() {
        NumSource::I8(v) => Rational::from(v),
        NumSource::I16(v) => Rational::from(v),
        NumSource::I32(v) => Rational::from(v),
        NumSource::I64(v) => Rational::from(v),
        NumSource::Isize(v) => Rational::from(v),
        NumSource::U8(v) => Rational::from(v),
        NumSource::U16(v) => Rational::from(v),
        NumSource::U32(v) => Rational::from(v),
        NumSource::U64(v) => Rational::from(v),
        NumSource::Usize(v) => Rational::from(v),
        NumSource::F32(v) => Float::from_f64(f64::from(v))?.to_rational()?,
        NumSource::F64(v) => Float::from_f64(v)?.to_rational()?,
        NumSource::Integer(v) => Rational::from(v),
        NumSource::Rational(v) => return Ok(Cow::Borrowed(v)),
        NumSource::Float(v) => v.to_rational()?,
        NumSource::Str(s) => Rational::from_literal(s).inspect_err(|err| {
            tracing::debug!(input = s, %err, "rational coercion failed");
        })?,
    };
    Ok(Cow::Owned(value))
}

/// Creates a new float from `x`, with precision chosen by source kind.
///
/// | source | precision |
/// |---|---|
/// | `i8`/`u8`, `i16`/`u16`, `i32`/`u32`, `i64`/`u64` | 8, 16, 32, 64 |
/// | `isize`/`usize` | the word width |
/// | `f32` | 32 |
/// | `f64` | 53 |
/// | `Integer` | its bit length, at least 64 |
/// | `Rational` | the larger bit length of its parts, at least 64 |
/// | `Float` | unchanged |
/// | literal | its significant digits in bits, at least 64 |
///
/// # Errors
///
/// - [`Error::Parse`](bigcast_core::Error::Parse) for an invalid literal
/// - [`Error::NotANumber`](bigcast_core::Error::NotANumber) for NaN
pub fn to_float<'a>(x: impl Into<NumSource<'a>>) -> Result<Float> {
    float_operand(x).map(Cow::into_owned)
}

/// Overwrites `dest` with `x`. On error `dest` is left unchanged.
///
/// A rational source is rounded at `dest`'s current precision, or at the
/// precision [`to_float`] would give it when `dest` is infinite. Every other
/// source takes the precision [`to_float`] would give it.
///
/// # Errors
///
/// See [`to_float`].
pub fn set_float<'a>(dest: &mut Float, x: impl Into<NumSource<'a>>) -> Result<()> {
    match x.into() {
        NumSource::Rational(value) => dest.assign_rational(value),
        source => match float_operand(source)? {
            Cow::Borrowed(value) => dest.clone_from(value),
            Cow::Owned(value) => *dest = value,
        },
    }
    Ok(())
}

/// Coerces `x`, borrowing it if it is already a [`Float`].
///
/// # Errors
///
/// See [`to_float`].
pub fn float_operand<'a>(x: impl Into<NumSource<'a>>) -> Result<Cow<'a, Float>> {
    let value = match x.into() {
        NumSource::I8(v) => native(v, i8::BITS),
        NumSource::I16(v) => native(v, i16::BITS),
        NumSource::I32(v) => native(v, i32::BITS),
        NumSource::I64(v) => native(v, i64::BITS),
        NumSource::Isize(v) => native(v, isize::BITS),
        NumSource::U8(v) => native(v, u8::BITS),
        NumSource::U16(v) => native(v, u16::BITS),
        NumSource::U32(v) => native(v, u32::BITS),
        NumSource::U64(v) => native(v, u64::BITS),
        NumSource::Usize(v) => native(v, usize::BITS),
        NumSource::F32(v) => Float::from_f64(f64::from(v))?.with_precision(F32_PRECISION),
        NumSource::F64(v) => Float::from_f64(v)?,
        NumSource::Integer(v) => Float::from_integer(v, precision::for_bit_len(v.bit_len())),
        NumSource::Rational(v) => Float::from_rational(v, precision::for_rational(v)),
        NumSource::Float(v) => return Ok(Cow::Borrowed(v)),
        NumSource::Str(s) => Float::from_literal(s).inspect_err(|err| {
            tracing::debug!(input = s, %err, "float coercion failed");
        })?,
    };
    Ok(Cow::Owned(value))
}

fn native(value: impl Into<Integer>, bits: u32) -> Float {
    Float::from_integer(&value.into(), bits as usize)
}
