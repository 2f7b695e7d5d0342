//! Arithmetic utilities for pool calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types, [`div_round`] for explicit-rounding division, and the
//! pure [`price`] function implementing the fee-adjusted constant-product
//! curve.

mod checked;
mod pricing;
mod rounding;

pub use checked::CheckedArithmetic;
pub use pricing::{price, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use rounding::div_round;
