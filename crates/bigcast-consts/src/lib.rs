//! # bigcast-consts
//!
//! Mathematical constants rounded to a requested number of bits.
//!
//! - [`pi`]: Gauss–Legendre arithmetic-geometric mean iteration
//! - [`e`]: the exponential of one
//! - [`phi`]: the golden ratio `(1 + √5) / 2`
//!
//! Every constant is deterministic: the same precision always yields the
//! same bits.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod e;
mod phi;
mod pi;

#[cfg(test)]
mod proptests;

pub use e::e;
pub use phi::phi;
pub use pi::pi;

use bigcast_core::precision::MAX_PRECISION;

fn check_precision(precision: usize) {
    assert!(
        precision > 0 && precision < MAX_PRECISION,
        "precision {precision} out of range (0, {MAX_PRECISION})"
    );
}
