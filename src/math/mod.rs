//! Numerical utilities: exact summation and correctly rounded means.

pub mod exact;

pub use exact::*;
