//! The fungible-token seam.
//!
//! The pool never owns a token implementation.  It reaches the token
//! through [`TokenLedger`], which mirrors the three calls an ERC-20 style
//! contract exposes to another contract: a balance query, a transfer from
//! the caller's own balance, and an allowance-backed transfer on behalf of
//! someone else.
//!
//! # Failure Contract
//!
//! `transfer` and `transfer_from` report rejection by returning `false`.
//! Implementations must leave their own state untouched when they return
//! `false`; the pool turns every `false` into an abort of the whole
//! operation.

use crate::domain::{Address, Amount};

/// Token interface consumed by the pool.
///
/// # Implementors
///
/// - [`MemoryToken`](crate::ledger::MemoryToken): in-memory ERC-20 style
///   ledger with allowances and a block list.
pub trait TokenLedger {
    /// Returns the token balance held by `account`.
    #[must_use]
    fn balance_of(&self, account: &Address) -> Amount;

    /// Moves `amount` from `sender`'s own balance to `to`.
    ///
    /// `sender` is the account making the call (for the pool, its own
    /// address).  Returns `false` if the transfer is rejected.
    fn transfer(&mut self, sender: &Address, to: &Address, amount: Amount) -> bool;

    /// Moves `amount` from `from` to `to`, spending the allowance `from`
    /// granted to `spender`.
    ///
    /// Returns `false` if the transfer is rejected (insufficient balance,
    /// insufficient allowance, or an implementation-specific refusal).
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> bool;
}
