//! # bigcast-core
//!
//! Canonical arbitrary-precision values for bigcast.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals in lowest terms (`Rational`)
//! - Binary floating point with an explicit precision (`Float`)
//!
//! It also owns the error type shared by every bigcast crate and the
//! precision constants used when a value is created from a source that
//! does not carry its own precision.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod float;
pub mod integer;
mod literal;
pub mod precision;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use dashu::integer::Word;
pub use error::{Error, NumberKind, Result};
pub use float::Float;
pub use integer::Integer;
pub use rational::Rational;
