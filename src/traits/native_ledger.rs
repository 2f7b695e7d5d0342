//! The native settlement-asset seam.
//!
//! The pool's native reserve is whatever the settlement layer says the
//! pool's account holds.  [`NativeLedger`] exposes that balance and the
//! opaque "send value to address" primitive.  A send is a call-style
//! transfer whose result the pool always checks: the recipient may be a
//! contract that refuses the value.

use crate::domain::{Address, Amount};

/// Native-asset interface consumed by the pool.
///
/// # Implementors
///
/// - [`NativeBank`](crate::ledger::NativeBank): in-memory balances with
///   recipients that can refuse value.
pub trait NativeLedger {
    /// Returns the native balance held by `account`.
    #[must_use]
    fn balance_of(&self, account: &Address) -> Amount;

    /// Sends `amount` from `from` to `to`.
    ///
    /// The same primitive carries value attached to a pool call (caller to
    /// pool) and payouts (pool to caller).  Returns `false` on rejection,
    /// leaving balances untouched.
    fn send(&mut self, from: &Address, to: &Address, amount: Amount) -> bool;
}
