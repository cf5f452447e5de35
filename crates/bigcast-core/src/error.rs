//! Errors reported by coercions and operations.
//!
//! Only data errors live here. Caller mistakes such as a zero precision
//! request or an out-of-range shift amount panic instead.

use std::fmt;

use thiserror::Error;

/// The numeric family a literal was parsed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// An integer literal, optionally base-prefixed.
    Integer,
    /// A fraction or decimal literal.
    Rational,
    /// A decimal or scientific literal.
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => f.write_str("integer"),
            NumberKind::Rational => f.write_str("rational"),
            NumberKind::Float => f.write_str("float"),
        }
    }
}

/// Errors that can occur while coercing or operating on values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeral string is not valid for the requested family.
    #[error("invalid {kind} literal {input:?}")]
    Parse {
        /// The family the string was parsed for.
        kind: NumberKind,
        /// The rejected input.
        input: String,
    },

    /// A NaN has no value in any canonical representation.
    #[error("NaN cannot be converted to a canonical value")]
    NotANumber,

    /// An infinite float has no rational equivalent.
    #[error("infinite value has no finite rational equivalent")]
    NotFinite,

    /// An exact integer was required but the value has a fractional part.
    #[error("value is not an integer")]
    NotAnInteger,

    /// A divisor, denominator or modulus was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The value has no inverse for the given modulus.
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,

    /// The value is not a quadratic residue for the given modulus.
    #[error("value has no square root modulo the given modulus")]
    NoSquareRoot,

    /// A random bound must be strictly positive.
    #[error("bound must be positive")]
    NonPositiveBound,
}

impl Error {
    /// Builds a parse error for `input`.
    #[must_use]
    pub fn parse(kind: NumberKind, input: &str) -> Self {
        Error::Parse {
            kind,
            input: input.to_owned(),
        }
    }
}

/// Result alias used across bigcast.
pub type Result<T> = std::result::Result<T, Error>;
