//! LP units: claims on a pro-rata share of both reserves.

use core::fmt;

use primitive_types::U256;

use super::Amount;

/// A quantity of LP units.
///
/// Distinct from [`Amount`] because it measures a claim on the pool rather
/// than a quantity of either asset.  The value of one unit floats with the
/// reserves.  Pricing arithmetic crosses between the two via
/// [`as_amount`](Self::as_amount) and [`from_amount`](Self::from_amount).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Creates a new `Liquidity` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
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

    /// Reinterprets LP units as a raw amount for pricing arithmetic.
    pub const fn as_amount(&self) -> Amount {
        Amount::from_raw(self.0)
    }

    /// Mints LP units equal in number to a computed raw amount.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
