//! Rounding helpers for integer division.
//!
//! [`div_round`] performs 256-bit division with an explicit [`Rounding`]
//! direction.  It is the low-level building block used by
//! [`Amount`](crate::domain::Amount) and
//! [`Liquidity`](crate::domain::Liquidity).
//!
//! # Convention
//!
//! **Always round against the caller** (pool-favorable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Withdrawal share | [`Rounding::Down`] |
//! | LP units minted | [`Rounding::Down`] |
//! | Token pulled on deposit | floor + 1 (see [`crate::pool`]) |

use primitive_types::U256;

use crate::domain::Rounding;

/// Integer division of `U256` values with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division (round towards zero).
/// - [`Rounding::Up`]: ceiling division.
///
/// Returns [`None`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Rounding;
/// use hydra_dex::math::div_round;
/// use primitive_types::U256;
///
/// let ten = U256::from(10u8);
/// let three = U256::from(3u8);
/// assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u8)));
/// assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u8)));
/// assert_eq!(div_round(ten, U256::zero(), Rounding::Down), None);
/// ```
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let (quotient, remainder) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up if remainder.is_zero() => Some(quotient),
        // quotient < U256::MAX whenever the remainder is non-zero
        Rounding::Up => quotient.checked_add(U256::one()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(u(10), u(5), Rounding::Down), Some(u(2)));
        assert_eq!(div_round(u(10), u(5), Rounding::Up), Some(u(2)));
    }

    #[test]
    fn remainder_splits_directions() {
        assert_eq!(div_round(u(7), u(2), Rounding::Down), Some(u(3)));
        assert_eq!(div_round(u(7), u(2), Rounding::Up), Some(u(4)));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(U256::zero(), u(5), Rounding::Up), Some(U256::zero()));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(div_round(u(1), U256::zero(), Rounding::Down), None);
        assert_eq!(div_round(u(1), U256::zero(), Rounding::Up), None);
    }

    #[test]
    fn max_round_up_does_not_overflow() {
        let max = U256::MAX;
        let floor = div_round(max, u(2), Rounding::Down);
        let ceil = div_round(max, u(2), Rounding::Up);
        assert_eq!(floor, Some(max / u(2)));
        assert_eq!(ceil, Some(max / u(2) + u(1)));
    }

    #[test]
    fn smaller_numerator() {
        assert_eq!(div_round(u(1), u(2), Rounding::Down), Some(U256::zero()));
        assert_eq!(div_round(u(1), u(2), Rounding::Up), Some(u(1)));
    }
}
