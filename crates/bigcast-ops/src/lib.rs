//! # bigcast-ops
//!
//! Operations that accept any coercible operand and return a fresh value.
//!
//! Each function coerces its operands the same way the `to_*` functions of
//! `bigcast-coerce` do, borrowing operands that are already canonical, and
//! never modifies its inputs.
//!
//! - [`int`]: integer arithmetic, division families, modular and bitwise
//!   operations, random integers
//! - [`rat`]: exact rational arithmetic
//! - [`float`]: float arithmetic and transcendental functions
//!
//! ```rust,ignore
//! use bigcast_ops::{int, rat};
//!
//! let n = int::add_int("0x10", 2)?;
//! let q = rat::quo_rat("1/2", 0.25)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod float;
pub mod int;
pub mod rat;

#[cfg(test)]
mod proptests;
