//! # bigcast
//!
//! Arbitrary precision integers, rationals and floats that can be built
//! from, and combined with, any scalar a caller has at hand.
//!
//! ## Features
//!
//! - **Uniform coercion**: native integers and floats, strings, byte and
//!   word buffers, and existing big values all convert through one entry
//!   point per number family
//! - **Width-aware precision**: a float takes the precision its source
//!   already carries
//! - **Operations over mixed operands**: `add_int(&n, "0x10")` just works
//! - **Constants**: pi, e and the golden ratio to any number of bits
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bigcast::prelude::*;
//!
//! let n = to_integer("0xff")?;
//! let half = to_rat_frac(1, 2)?;
//! let sum = add_rat(&half, 0.25)?;
//! let pi = pi(256);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bigcast_coerce as coerce;
pub use bigcast_consts as consts;
pub use bigcast_core as core;
pub use bigcast_ops as ops;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bigcast_coerce::{
        extract_integer, is_integer_like, set_float, set_integer, set_rat_frac, set_rational,
        to_float, to_integer, to_rat_frac, to_rational, IntSource, NumSource,
    };
    pub use bigcast_consts::{e, phi, pi};
    pub use bigcast_core::{Error, Float, Integer, Rational, Result};
    pub use bigcast_ops::float::*;
    pub use bigcast_ops::int::*;
    pub use bigcast_ops::rat::*;
}
