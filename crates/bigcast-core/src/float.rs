//! Binary floating point numbers with an explicit precision.
//!
//! This module wraps `dashu::float::FBig` in round-half-to-even mode. Every
//! [`Float`] carries a precision in bits; results of binary operations take
//! the larger precision of their operands.

use dashu::base::{Abs, BitTest};
use dashu::float::ops::SquareRoot;
use dashu::float::round::mode::HalfEven;
use dashu::float::FBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{Error, NumberKind, Result};
use crate::literal::DecimalLiteral;
use crate::precision::{self, DEFAULT_PRECISION, F64_PRECISION};
use crate::{Integer, Rational};

type Repr = FBig<HalfEven>;

/// An arbitrary precision binary float.
#[derive(Clone)]
pub struct Float(Repr);

impl Float {
    /// Creates zero with the given precision.
    #[must_use]
    pub fn zero_with_precision(precision: usize) -> Self {
        Self(Repr::ZERO.with_precision(precision).value())
    }

    /// Creates `significand * 2^exponent`, rounded to `precision` bits.
    #[must_use]
    pub fn from_parts(significand: Integer, exponent: isize, precision: usize) -> Self {
        Self(
            Repr::from_parts(significand.into_inner(), exponent)
                .with_precision(precision)
                .value(),
        )
    }

    /// Creates a float from an integer, rounded to `precision` bits.
    #[must_use]
    pub fn from_integer(value: &Integer, precision: usize) -> Self {
        Self::from_parts(value.clone(), 0, precision)
    }

    /// Converts a native `f64` exactly, with precision 53.
    ///
    /// Infinities are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotANumber`] for NaN.
    pub fn from_f64(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::NotANumber);
        }
        if value.is_infinite() {
            return Ok(if value > 0.0 {
                Self::infinity()
            } else {
                Self::neg_infinity()
            });
        }
        let repr = Repr::try_from(value).map_err(|_| Error::NotANumber)?;
        Ok(Self(repr.with_precision(F64_PRECISION).value()))
    }

    /// Rounds `value` to `precision` bits.
    ///
    /// The result is exact when `value` is representable, otherwise it is
    /// the nearest float, ties to even.
    #[must_use]
    pub fn from_rational(value: &Rational, precision: usize) -> Self {
        let num = value.numerator();
        if num.is_zero() {
            return Self::zero_with_precision(precision);
        }
        let den = value.denominator();

        // Scale so that the quotient carries at least precision + 2 bits;
        // the remainder then only matters as a sticky bit.
        let shift = (precision + 2 + den.bit_len()) as isize - num.bit_len() as isize;
        let magnitude = num.abs();
        let (scaled_num, scaled_den) = if shift >= 0 {
            (&magnitude << shift.unsigned_abs(), den)
        } else {
            (magnitude, &den << shift.unsigned_abs())
        };
        let (quotient, remainder) = scaled_num.quo_rem(&scaled_den);
        let mut significand = &quotient << 1;
        if !remainder.is_zero() {
            significand = significand + Integer::one();
        }
        if num.is_negative() {
            significand = -significand;
        }
        Self::from_parts(significand, -shift - 1, precision)
    }

    /// Parses a float literal.
    ///
    /// Accepts decimal and scientific notation (`-1.5`, `2.5e-3`) and the
    /// infinities `inf`, `+inf`, `-inf` in any letter case. The precision is
    /// the bit equivalent of the literal's significant digits, at least
    /// [`DEFAULT_PRECISION`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the string is not a valid literal.
    pub fn from_literal(src: &str) -> Result<Self> {
        match src.to_ascii_lowercase().as_str() {
            "inf" | "+inf" => return Ok(Self::infinity()),
            "-inf" => return Ok(Self::neg_infinity()),
            _ => {}
        }
        let literal =
            DecimalLiteral::parse(src).ok_or_else(|| Error::parse(NumberKind::Float, src))?;
        let precision = precision::for_decimal_digits(literal.digits);
        let exact = Rational::from_decimal_parts(literal.significand, literal.exponent);
        Ok(Self::from_rational(&exact, precision))
    }

    /// Positive infinity.
    #[must_use]
    pub fn infinity() -> Self {
        Self(Repr::INFINITY)
    }

    /// Negative infinity.
    #[must_use]
    pub fn neg_infinity() -> Self {
        Self(Repr::NEG_INFINITY)
    }

    /// Returns the precision in bits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.0.precision()
    }

    /// Rounds (or widens) to `precision` bits.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        if self.is_infinite() {
            return self;
        }
        Self(self.0.with_precision(precision).value())
    }

    /// Rounds (or widens) in place to `precision` bits.
    pub fn set_precision(&mut self, precision: usize) {
        *self = std::mem::take(self).with_precision(precision);
    }

    /// Overwrites `self` with `value` rounded at the current precision.
    ///
    /// Infinities carry no precision; an infinite `self` takes
    /// [`precision::for_rational`] of `value` instead.
    pub fn assign_rational(&mut self, value: &Rational) {
        let precision = if self.is_infinite() {
            precision::for_rational(value)
        } else {
            self.precision()
        };
        *self = Self::from_rational(value, precision);
    }

    /// Returns true for either infinity.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.0 == Repr::INFINITY || self.0 == Repr::NEG_INFINITY
    }

    /// Returns true if the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Repr::ZERO
    }

    /// Returns true if the value has no fractional part. Infinities are
    /// not integers.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.to_integer_exact().is_some()
    }

    /// Returns the exact integer value, if the float has no fractional part.
    #[must_use]
    pub fn to_integer_exact(&self) -> Option<Integer> {
        let (significand, exponent) = self.binary_parts()?;
        let shift = exponent.unsigned_abs();
        if exponent >= 0 {
            return Some(Integer::from(significand << shift));
        }
        if significand.is_zero() {
            return Some(Integer::zero());
        }
        if shift >= significand.bit_len() {
            return None;
        }
        let truncated = significand.clone() >> shift;
        (truncated.clone() << shift == significand).then(|| Integer::from(truncated))
    }

    /// Converts to an exact rational.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFinite`] for infinities.
    pub fn to_rational(&self) -> Result<Rational> {
        let (significand, exponent) = self.binary_parts().ok_or(Error::NotFinite)?;
        Ok(Rational::from_binary_parts(significand, exponent))
    }

    /// Rounds to the nearest native `f64`, ties to even.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns `self * 2^exp` at the same precision.
    #[must_use]
    pub fn mul_pow2(&self, exp: isize) -> Self {
        match self.binary_parts() {
            Some((significand, exponent)) => Self::from_parts(
                Integer::from(significand),
                exponent + exp,
                self.precision(),
            ),
            None => self.clone(),
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_infinite() {
            return Self::infinity();
        }
        Self(self.0.clone().abs())
    }

    /// Square root at the current precision.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        assert!(!self.is_negative(), "square root of a negative number");
        Self(self.0.sqrt())
    }

    /// Natural exponential at the current precision.
    #[must_use]
    pub fn exp(&self) -> Self {
        Self(self.0.exp())
    }

    /// Natural logarithm at the current precision. The logarithm of zero is
    /// negative infinity and the logarithm of one is exactly zero.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn ln(&self) -> Self {
        assert!(!self.is_negative(), "logarithm of a negative number");
        if self.is_zero() {
            return Self::neg_infinity();
        }
        if self.is_one() {
            return Self::zero_with_precision(self.precision());
        }
        Self(self.0.ln())
    }

    /// Computes `self^exp` at the precision of `self`.
    ///
    /// Zero raised to a negative power is positive infinity.
    ///
    /// # Panics
    ///
    /// Panics if `self` is negative.
    #[must_use]
    pub fn powf(&self, exp: &Self) -> Self {
        assert!(!self.is_negative(), "power of a negative base");
        let precision = self.precision();
        if exp.is_zero() {
            return Self::one().with_precision(precision);
        }
        if self.is_zero() {
            return if exp.is_negative() {
                Self::infinity()
            } else {
                Self::zero_with_precision(precision)
            };
        }
        let exp = exp.clone().with_precision(precision.max(exp.precision()));
        Self(self.0.powf(&exp.0)).with_precision(precision)
    }

    /// Returns the inner `dashu` float.
    #[must_use]
    pub fn into_inner(self) -> FBig<HalfEven> {
        self.0
    }

    /// Returns a reference to the inner `dashu` float.
    #[must_use]
    pub fn as_inner(&self) -> &FBig<HalfEven> {
        &self.0
    }

    fn binary_parts(&self) -> Option<(IBig, isize)> {
        if self.is_infinite() {
            return None;
        }
        Some(self.0.clone().into_repr().into_parts())
    }
}

impl Default for Float {
    fn default() -> Self {
        Self::zero_with_precision(DEFAULT_PRECISION)
    }
}

impl FromStr for Float {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl Zero for Float {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0 == Repr::ZERO
    }
}

impl One for Float {
    fn one() -> Self {
        Self::from_parts(Integer::one(), 0, DEFAULT_PRECISION)
    }
}

// Equality and ordering compare values only; precision is ignored.
impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Debug for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Float({}, prec={})", self.0, self.precision())
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for &Float {
    type Output = Float;

    fn add(self, rhs: Self) -> Self::Output {
        Float(&self.0 + &rhs.0)
    }
}

impl Add for Float {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for &Float {
    type Output = Float;

    fn sub(self, rhs: Self) -> Self::Output {
        Float(&self.0 - &rhs.0)
    }
}

impl Sub for Float {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for &Float {
    type Output = Float;

    fn mul(self, rhs: Self) -> Self::Output {
        Float(&self.0 * &rhs.0)
    }
}

impl Mul for Float {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for &Float {
    type Output = Float;

    fn div(self, rhs: Self) -> Self::Output {
        Float(&self.0 / &rhs.0)
    }
}

impl Div for Float {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Float {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == Repr::INFINITY {
            Self::neg_infinity()
        } else if self.0 == Repr::NEG_INFINITY {
            Self::infinity()
        } else {
            Self(-self.0)
        }
    }
}

impl Neg for &Float {
    type Output = Float;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
