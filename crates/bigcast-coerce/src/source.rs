//! Closed sets of source scalars.
//!
//! Adding a variant here is a breaking change: every coercion matches these
//! enums exhaustively.

use bigcast_core::{Float, Integer, Rational, Word};

/// A value that can be coerced into an [`Integer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntSource<'a> {
    /// Native `i8`.
    I8(i8),
    /// Native `i16`.
    I16(i16),
    /// Native `i32`.
    I32(i32),
    /// Native `i64`.
    I64(i64),
    /// Native `isize`.
    Isize(isize),
    /// Native `u8`.
    U8(u8),
    /// Native `u16`.
    U16(u16),
    /// Native `u32`.
    U32(u32),
    /// Native `u64`.
    U64(u64),
    /// Native `usize`.
    Usize(usize),
    /// An existing integer.
    Integer(&'a Integer),
    /// An integer literal, optionally base-prefixed.
    Str(&'a str),
    /// A big-endian unsigned magnitude.
    Bytes(&'a [u8]),
    /// An unsigned magnitude as engine words, least significant first.
    Words(&'a [Word]),
}

/// A value that can be coerced into a [`Rational`] or a [`Float`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumSource<'a> {
    /// Native `i8`.
    I8(i8),
    /// Native `i16`.
    I16(i16),
    /// Native `i32`.
    I32(i32),
    /// Native `i64`.
    I64(i64),
    /// Native `isize`.
    Isize(isize),
    /// Native `u8`.
    U8(u8),
    /// Native `u16`.
    U16(u16),
    /// Native `u32`.
    U32(u32),
    /// Native `u64`.
    U64(u64),
    /// Native `usize`.
    Usize(usize),
    /// Native `f32`.
    F32(f32),
    /// Native `f64`.
    F64(f64),
    /// An existing integer.
    Integer(&'a Integer),
    /// An existing rational.
    Rational(&'a Rational),
    /// An existing float.
    Float(&'a Float),
    /// A numeric literal.
    Str(&'a str),
}

macro_rules! impl_from_native {
    ($source:ident: $($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for $source<'_> {
                fn from(value: $t) -> Self {
                    $source::$variant(value)
                }
            }
        )*
    };
}

impl_from_native!(IntSource:
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
);

impl_from_native!(NumSource:
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
    f32 => F32, f64 => F64,
);

impl<'a> From<&'a Integer> for IntSource<'a> {
    fn from(value: &'a Integer) -> Self {
        IntSource::Integer(value)
    }
}

impl<'a> From<&'a str> for IntSource<'a> {
    fn from(value: &'a str) -> Self {
        IntSource::Str(value)
    }
}

impl<'a> From<&'a String> for IntSource<'a> {
    fn from(value: &'a String) -> Self {
        IntSource::Str(value)
    }
}

impl<'a> From<&'a [u8]> for IntSource<'a> {
    fn from(value: &'a [u8]) -> Self {
        IntSource::Bytes(value)
    }
}

impl<'a> From<&'a [Word]> for IntSource<'a> {
    fn from(value: &'a [Word]) -> Self {
        IntSource::Words(value)
    }
}

impl<'a> From<&'a Integer> for NumSource<'a> {
    fn from(value: &'a Integer) -> Self {
        NumSource::Integer(value)
    }
}

impl<'a> From<&'a Rational> for NumSource<'a> {
    fn from(value: &'a Rational) -> Self {
        NumSource::Rational(value)
    }
}

impl<'a> From<&'a Float> for NumSource<'a> {
    fn from(value: &'a Float) -> Self {
        NumSource::Float(value)
    }
}

impl<'a> From<&'a str> for NumSource<'a> {
    fn from(value: &'a str) -> Self {
        NumSource::Str(value)
    }
}

impl<'a> From<&'a String> for NumSource<'a> {
    fn from(value: &'a String) -> Self {
        NumSource::Str(value)
    }
}
