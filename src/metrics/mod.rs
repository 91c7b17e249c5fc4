//! Pure, deterministic performance calculations over trade collections.
//!
//! Nothing in this module touches storage or store state; every function
//! takes plain trade data and returns a value. Empty or incomplete input
//! yields the documented neutral defaults, never a panic or NaN.

pub mod breakdown;
pub mod calculations;
pub mod format;

pub use breakdown::*;
pub use calculations::*;
pub use format::*;

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
