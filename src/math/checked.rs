//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning checked
//! operations on [`Amount`] and [`Liquidity`] into
//! [`Result<Self, DexError>`](crate::error::DexError) so pool handlers can
//! propagate arithmetic faults with `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_dex::domain::{Amount, Rounding};
//! use hydra_dex::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! let b = Amount::new(200);
//! assert_eq!(a.safe_add(&b), Ok(Amount::new(300)));
//! assert!(a.safe_div(&Amount::ZERO, Rounding::Down).is_err());
//! ```

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::DexError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation or wraparound**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the result exceeds 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, DexError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, DexError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the result exceeds 256 bits.
    fn safe_mul(&self, other: &Self) -> Result<Self, DexError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, DexError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_add(other)
            .ok_or(DexError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_mul(other)
            .ok_or(DexError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, DexError> {
        self.checked_div(other, rounding)
            .ok_or(DexError::DivisionByZero)
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_add(other)
            .ok_or(DexError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("liquidity subtraction underflow"))
    }

    fn safe_mul(&self, other: &Self) -> Result<Self, DexError> {
        self.as_amount()
            .checked_mul(&other.as_amount())
            .map(Liquidity::from_amount)
            .ok_or(DexError::Overflow("liquidity multiplication overflow"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, DexError> {
        self.as_amount()
            .checked_div(&other.as_amount(), rounding)
            .map(Liquidity::from_amount)
            .ok_or(DexError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_overflow() {
            let Err(DexError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_underflow() {
            let Err(DexError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn mul_ok() {
            let Ok(r) = Amount::new(997).safe_mul(&Amount::new(1_000)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(997_000));
        }

        #[test]
        fn mul_overflow() {
            let Err(DexError::Overflow(_)) = Amount::MAX.safe_mul(&Amount::new(2)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn div_by_zero() {
            assert_eq!(
                Amount::new(5).safe_div(&Amount::ZERO, Rounding::Up),
                Err(DexError::DivisionByZero)
            );
        }
    }

    mod liquidity {
        use super::*;

        #[test]
        fn add_and_sub() {
            assert_eq!(
                Liquidity::new(2).safe_add(&Liquidity::new(3)),
                Ok(Liquidity::new(5))
            );
            let Err(DexError::Underflow(_)) = Liquidity::new(2).safe_sub(&Liquidity::new(3)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn mul_and_div() {
            assert_eq!(
                Liquidity::new(6).safe_mul(&Liquidity::new(7)),
                Ok(Liquidity::new(42))
            );
            assert_eq!(
                Liquidity::new(7).safe_div(&Liquidity::new(2), Rounding::Up),
                Ok(Liquidity::new(4))
            );
            assert_eq!(
                Liquidity::new(7).safe_div(&Liquidity::ZERO, Rounding::Down),
                Err(DexError::DivisionByZero)
            );
        }
    }
}
