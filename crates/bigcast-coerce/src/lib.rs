//! # bigcast-coerce
//!
//! Uniform coercion of scalar inputs into canonical values.
//!
//! Every accepted input kind is a variant of a closed source enum:
//! - [`IntSource`]: inputs accepted where an `Integer` is expected
//! - [`NumSource`]: inputs accepted where a `Rational` or `Float` is expected
//!
//! `From` impls let callers pass native values, strings and borrowed
//! canonical values directly:
//!
//! ```rust,ignore
//! use bigcast_coerce::{to_integer, to_rat_frac};
//!
//! let n = to_integer("0xff")?;
//! let half = to_rat_frac(1, 2)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod coerce;
pub mod source;

#[cfg(test)]
mod proptests;

pub use classify::{extract_integer, is_integer_like, set_rat_frac, to_rat_frac};
pub use coerce::{
    float_operand, integer_operand, rational_operand, set_float, set_integer, set_rational,
    to_float, to_integer, to_rational,
};
pub use source::{IntSource, NumSource};
