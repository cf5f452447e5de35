//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic over [`Integer`].

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{Error, NumberKind, Result};
use crate::literal::DecimalLiteral;
use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The sign of the denominator is moved onto the numerator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ))
    }

    /// Creates a new rational, reporting a zero denominator as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `denominator` is zero.
    pub fn try_new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates the exact value `significand * 2^exponent`.
    #[must_use]
    pub fn from_binary_parts(significand: IBig, exponent: isize) -> Self {
        let magnitude = exponent.unsigned_abs();
        if exponent >= 0 {
            Self(RBig::from(significand << magnitude))
        } else {
            Self(RBig::from_parts(significand, UBig::ONE << magnitude))
        }
    }

    /// Creates the exact value `significand * 10^exponent`.
    ///
    /// The cost grows with `|exponent|`; literal parsing bounds it first.
    #[must_use]
    pub fn from_decimal_parts(significand: IBig, exponent: isize) -> Self {
        let scale = UBig::from(10u8).pow(exponent.unsigned_abs());
        if exponent >= 0 {
            Self(RBig::from(significand * IBig::from(scale)))
        } else {
            Self(RBig::from_parts(significand, scale))
        }
    }

    /// Parses a rational literal.
    ///
    /// Accepts `a/b` where `a` is an integer literal and `b` is a non-zero
    /// unsigned integer literal, or a decimal literal such as `-1.25` or
    /// `3e-2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the string is not a valid literal.
    pub fn from_literal(src: &str) -> Result<Self> {
        let err = || Error::parse(NumberKind::Rational, src);
        if let Some((num, den)) = src.split_once('/') {
            if den.starts_with(['+', '-']) {
                return Err(err());
            }
            let num = Integer::from_literal(num).map_err(|_| err())?;
            let den = Integer::from_literal(den).map_err(|_| err())?;
            return Self::try_new(num, den).map_err(|_| err());
        }
        let literal = DecimalLiteral::parse(src).ok_or_else(err)?;
        Ok(Self::from_decimal_parts(literal.significand, literal.exponent))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<&Integer> for Rational {
    fn from(n: &Integer) -> Self {
        Self::from_integer(n.clone())
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Self(RBig::from(IBig::from(n)))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
