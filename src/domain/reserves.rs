//! Point-in-time view of the pool's two reserves.

use primitive_types::U512;

use super::Amount;

/// Snapshot of the native and token reserves.
///
/// Reserves are never stored by the pool; a `Reserves` value is built
/// from live collaborator balances at the moment it is requested and goes
/// stale as soon as any operation commits.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Amount, Reserves};
///
/// let r = Reserves::new(Amount::new(10), Amount::new(20));
/// assert_eq!(r.product(), Reserves::new(Amount::new(20), Amount::new(10)).product());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    native: Amount,
    token: Amount,
}

impl Reserves {
    /// Creates a snapshot from the two balances.
    #[must_use]
    pub const fn new(native: Amount, token: Amount) -> Self {
        Self { native, token }
    }

    /// Native-asset reserve.
    pub const fn native(&self) -> Amount {
        self.native
    }

    /// Token reserve.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// The constant-product invariant `native × token`, widened to 512 bits
    /// so it never overflows.
    #[must_use]
    pub fn product(&self) -> U512 {
        self.native.get().full_mul(self.token.get())
    }

    /// Returns `true` if either side is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.native.is_zero() || self.token.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_of_max_reserves_fits() {
        let r = Reserves::new(Amount::MAX, Amount::MAX);
        assert!(r.product() > U512::from(u128::MAX));
    }

    #[test]
    fn accessors() {
        let r = Reserves::new(Amount::new(3), Amount::new(4));
        assert_eq!(r.native(), Amount::new(3));
        assert_eq!(r.token(), Amount::new(4));
        assert_eq!(r.product(), U512::from(12u8));
    }

    #[test]
    fn emptiness() {
        assert!(Reserves::default().is_empty());
        assert!(Reserves::new(Amount::new(1), Amount::ZERO).is_empty());
        assert!(!Reserves::new(Amount::new(1), Amount::new(1)).is_empty());
    }
}
