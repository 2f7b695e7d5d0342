//! Constant-product pricing with a fixed 0.3% fee.
//!
//! ```text
//! output = input × 997 × reserve_out / (reserve_in × 1000 + input × 997)
//! ```
//!
//! The fee is folded into the numerator: `input × 997` is kept as an
//! intermediate product and only the final quotient is truncated, so no
//! precision is lost before the single division.  Truncation always
//! favors the pool; the residue accumulates in the reserves alongside the
//! fee.

use crate::domain::{Amount, Rounding};
use crate::error::DexError;
use crate::math::CheckedArithmetic;

/// Fee-scaled numerator: 997 / 1000 of the input reaches the curve.
pub const FEE_NUMERATOR: u128 = 997;

/// Fee denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Quotes the output of a swap.
///
/// `input_reserve` and `output_reserve` are the reserves **before** the
/// input is added.  The function is pure: it reads and writes no state.
///
/// # Errors
///
/// - [`DexError::Overflow`] if any intermediate product exceeds 256 bits.
/// - [`DexError::DivisionByZero`] if both `input_amount` and
///   `input_reserve` are zero.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Amount;
/// use hydra_dex::math::price;
///
/// let out = price(Amount::new(1_000), Amount::new(10_000), Amount::new(10_000));
/// assert_eq!(out, Ok(Amount::new(906)));
/// ```
pub fn price(
    input_amount: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount, DexError> {
    let input_with_fee = input_amount.safe_mul(&Amount::new(FEE_NUMERATOR))?;
    let numerator = input_with_fee.safe_mul(&output_reserve)?;
    let denominator = input_reserve
        .safe_mul(&Amount::new(FEE_DENOMINATOR))?
        .safe_add(&input_with_fee)?;
    numerator.safe_div(&denominator, Rounding::Down)
}
