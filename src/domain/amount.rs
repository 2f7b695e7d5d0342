//! Raw asset amount with checked 256-bit arithmetic.

use core::fmt;

use primitive_types::U256;

use super::Rounding;
use crate::math::div_round;

/// A raw asset amount in the smallest unit (wei or equivalent).
///
/// Backed by a 256-bit unsigned integer so that reserves, inputs and their
/// fee-scaled products share the width of the settlement environment.
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of wrapping or panicking.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(b.checked_div(&Amount::new(3), Rounding::Down), Some(Amount::new(66)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Maximum representable amount (`2^256 - 1`).
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    /// Creates a new `Amount` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a raw `U256` value.
    pub const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u128` if it fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.0 > U256::from(u128::MAX) {
            None
        } else {
            Some(self.0.low_u128())
        }
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        div_round(self.0, divisor.0, rounding).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), U256::from(42u8));
    }

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn to_u128_bounds() {
        assert_eq!(Amount::new(u128::MAX).to_u128(), Some(u128::MAX));
        let Some(above) = Amount::new(u128::MAX).checked_add(&Amount::new(1)) else {
            panic!("fits in 256 bits");
        };
        assert_eq!(above.to_u128(), None);
    }

    #[test]
    fn widths_beyond_u128() {
        let big = Amount::new(u128::MAX);
        let Some(square) = big.checked_mul(&big) else {
            panic!("u128::MAX squared fits in 256 bits");
        };
        assert!(square > big);
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    #[test]
    fn div_rounding() {
        let a = Amount::new(10);
        let d = Amount::new(3);
        assert_eq!(a.checked_div(&d, Rounding::Down), Some(Amount::new(3)));
        assert_eq!(a.checked_div(&d, Rounding::Up), Some(Amount::new(4)));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(
            Amount::new(100).checked_div(&Amount::ZERO, Rounding::Down),
            None
        );
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert!(Amount::MAX > Amount::new(u128::MAX));
    }
}
