//! Per-call execution context.

use crate::domain::{Address, Amount, PoolEvent};
use crate::traits::{NativeLedger, TokenLedger};

/// Everything a pool handler may touch during one call.
///
/// Bundles the caller, the value attached to the call, mutable access to
/// both collaborators, and the sink for emitted records.
///
/// # Value Semantics
///
/// When a handler runs, `value` has **already** been moved from the caller
/// to the pool by the native primitive, exactly as a value-carrying call
/// does.  Handlers that need the reserve as it stood before the call
/// subtract `value` from the live balance.
pub struct Context<'a, T, N> {
    caller: Address,
    value: Amount,
    token: &'a mut T,
    native: &'a mut N,
    events: &'a mut Vec<PoolEvent>,
}

impl<'a, T: TokenLedger, N: NativeLedger> Context<'a, T, N> {
    /// Creates a context.  The caller is responsible for having credited
    /// `value` to the pool in `native` beforehand.
    pub fn new(
        caller: Address,
        value: Amount,
        token: &'a mut T,
        native: &'a mut N,
        events: &'a mut Vec<PoolEvent>,
    ) -> Self {
        Self {
            caller,
            value,
            token,
            native,
            events,
        }
    }

    /// The account making the call.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Native value attached to the call.
    pub const fn value(&self) -> Amount {
        self.value
    }

    /// Read access to the token.
    #[must_use]
    pub fn token(&self) -> &T {
        self.token
    }

    /// Mutable access to the token.
    pub fn token_mut(&mut self) -> &mut T {
        self.token
    }

    /// Read access to native balances.
    #[must_use]
    pub fn native(&self) -> &N {
        self.native
    }

    /// Mutable access to native balances.
    pub fn native_mut(&mut self) -> &mut N {
        self.native
    }

    /// Stages a record for emission.
    pub fn emit(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}
