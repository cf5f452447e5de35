//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` together with the
//! constructors the coercion layer needs: base-prefixed literals, big-endian
//! byte buffers and raw engine words.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig, Word};
use num_traits::{One, Zero};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use std::str::FromStr;

use crate::error::{Error, NumberKind, Result};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig`. Bitwise operations follow two's
/// complement semantics on the infinite-width representation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer literal.
    ///
    /// Accepts an optional sign followed by either a decimal number or a
    /// base-prefixed number: `0x`/`0X` (hex), `0o`/`0O` (octal), `0b`/`0B`
    /// (binary) or a bare leading `0` (octal). Underscores may separate
    /// digits of a prefixed literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the string is not a valid literal.
    pub fn from_literal(src: &str) -> Result<Self> {
        parse_prefixed(src)
            .map(Self)
            .ok_or_else(|| Error::parse(NumberKind::Integer, src))
    }

    /// Creates an integer from a string of digits in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        IBig::from_str_radix(s, radix)
            .map(Self)
            .map_err(|_| Error::parse(NumberKind::Integer, s))
    }

    /// Interprets `bytes` as a big-endian unsigned magnitude.
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(IBig::from(UBig::from_be_bytes(bytes)))
    }

    /// Interprets `words` as an unsigned magnitude in the engine's native
    /// layout (least significant word first).
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self(IBig::from(UBig::from_words(words)))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
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

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if the lowest bit is clear.
    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.0.bit(0)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Compares magnitudes, ignoring signs.
    #[must_use]
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        self.0
            .clone()
            .unsigned_abs()
            .cmp(&other.0.clone().unsigned_abs())
    }

    /// Computes the greatest common divisor. The result is never negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Divides with the remainder taking the sign of the dividend.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn quo_rem(&self, divisor: &Self) -> (Self, Self) {
        (Self(&self.0 / &divisor.0), Self(&self.0 % &divisor.0))
    }

    /// Euclidean division: the remainder is always in `[0, |divisor|)`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_mod(&self, divisor: &Self) -> (Self, Self) {
        let (mut q, mut r) = self.quo_rem(divisor);
        if r.is_negative() {
            if divisor.is_negative() {
                q = q + Integer::one();
                r = r - divisor;
            } else {
                q = q - Integer::one();
                r = r + divisor;
            }
        }
        (q, r)
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a usize.
    #[must_use]
    pub fn to_usize(&self) -> Option<usize> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }
}

/// Splits off a base prefix, returning the radix, the digits, and whether a
/// prefix was present.
fn split_radix(body: &str) -> (u32, &str, bool) {
    let bytes = body.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        return match bytes[1] {
            b'x' | b'X' => (16, &body[2..], true),
            b'o' | b'O' => (8, &body[2..], true),
            b'b' | b'B' => (2, &body[2..], true),
            _ => (8, &body[1..], true),
        };
    }
    (10, body, false)
}

/// Removes single `_` separators. A separator may not end the literal or
/// follow another separator.
fn strip_separators(digits: &str) -> Option<Cow<'_, str>> {
    if !digits.contains('_') {
        return Some(Cow::Borrowed(digits));
    }
    if digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(Cow::Owned(digits.replace('_', "")))
}

fn parse_prefixed(src: &str) -> Option<IBig> {
    let (negative, body) = match src.as_bytes().first()? {
        b'+' => (false, &src[1..]),
        b'-' => (true, &src[1..]),
        _ => (false, src),
    };
    let (radix, digits, prefixed) = split_radix(body);
    let digits = if prefixed {
        strip_separators(digits)?
    } else {
        Cow::Borrowed(digits)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let magnitude = IBig::from(UBig::from_str_radix(&digits, radix).ok()?);
    Some(if negative { -magnitude } else { magnitude })
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Self::Output {
        Integer(&self.0 % &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

// Bitwise operations
impl BitAnd for &Integer {
    type Output = Integer;

    fn bitand(self, rhs: Self) -> Self::Output {
        Integer(&self.0 & &rhs.0)
    }
}

impl BitOr for &Integer {
    type Output = Integer;

    fn bitor(self, rhs: Self) -> Self::Output {
        Integer(&self.0 | &rhs.0)
    }
}

impl BitXor for &Integer {
    type Output = Integer;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Integer(&self.0 ^ &rhs.0)
    }
}

impl Not for &Integer {
    type Output = Integer;

    fn not(self) -> Self::Output {
        Integer(!self.0.clone())
    }
}

impl Shl<usize> for &Integer {
    type Output = Integer;

    fn shl(self, rhs: usize) -> Self::Output {
        Integer(self.0.clone() << rhs)
    }
}

impl Shr<usize> for &Integer {
    type Output = Integer;

    fn shr(self, rhs: usize) -> Self::Output {
        Integer(self.0.clone() >> rhs)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self(IBig::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((&a + &b).to_i64(), Some(13));
        assert_eq!((&a - &b).to_i64(), Some(7));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((&a / &b).to_i64(), Some(3));
        assert_eq!((&a % &b).to_i64(), Some(1));
    }

    #[test]
    fn test_gcd() {
        let a = Integer::new(48);
        let b = Integer::new(-18);
        assert_eq!(a.gcd(&b).to_i64(), Some(6));
    }

    #[test]
    fn test_large_numbers() {
        let a = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let b = Integer::from_str_radix("987654321098765432109876543210", 10).unwrap();
        let sum = a + b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
    }

    #[test]
    fn test_literals() {
        assert_eq!(Integer::from_literal("42").unwrap(), Integer::new(42));
        assert_eq!(Integer::from_literal("-0x_ff").unwrap(), Integer::new(-255));
        assert_eq!(Integer::from_literal("0b1010").unwrap(), Integer::new(10));
        assert_eq!(Integer::from_literal("0o17").unwrap(), Integer::new(15));
        assert_eq!(Integer::from_literal("017").unwrap(), Integer::new(15));
        assert_eq!(Integer::from_literal("0").unwrap(), Integer::new(0));
        assert_eq!(Integer::from_literal("0x1_000").unwrap(), Integer::new(4096));
    }

    #[test]
    fn test_bad_literals() {
        for src in ["", "-", "0x", "1_000", "0x1__0", "0x10_", "08", "12a", "+-1", " 1"] {
            assert_eq!(
                Integer::from_literal(src),
                Err(Error::parse(NumberKind::Integer, src)),
                "{src:?}"
            );
        }
    }

    #[test]
    fn test_bytes_and_words() {
        assert_eq!(Integer::from_be_bytes(&[0x01, 0x00]), Integer::new(256));
        assert_eq!(Integer::from_be_bytes(&[]), Integer::zero());
        assert_eq!(Integer::from_words(&[7]), Integer::new(7));
        assert_eq!(Integer::from_words(&[0, 1]), &Integer::one() << Word::BITS as usize);
    }

    #[test]
    fn test_div_mod() {
        let cases = [(7, 2, 3, 1), (-7, 2, -4, 1), (7, -2, -3, 1), (-7, -2, 4, 1)];
        for (a, b, q, r) in cases {
            let (qq, rr) = Integer::new(a).div_mod(&Integer::new(b));
            assert_eq!((qq.to_i64(), rr.to_i64()), (Some(q), Some(r)), "{a} / {b}");
        }
        let (q, r) = Integer::new(-7).quo_rem(&Integer::new(2));
        assert_eq!((q.to_i64(), r.to_i64()), (Some(-3), Some(-1)));
    }

    #[test]
    fn test_bitwise() {
        let a = Integer::new(0b1100);
        let b = Integer::new(0b1010);
        assert_eq!((&a & &b).to_i64(), Some(0b1000));
        assert_eq!((&a | &b).to_i64(), Some(0b1110));
        assert_eq!((&a ^ &b).to_i64(), Some(0b0110));
        assert_eq!((!&a).to_i64(), Some(-13));
        assert_eq!((&Integer::new(-8) >> 1).to_i64(), Some(-4));
        assert_eq!((&Integer::new(3) << 4).to_i64(), Some(48));
    }
}
