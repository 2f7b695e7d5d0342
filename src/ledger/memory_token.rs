//! In-memory ERC-20 style token.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Address, Amount};
use crate::error::Result;
use crate::math::CheckedArithmetic;
use crate::traits::TokenLedger;

/// A fungible-token ledger held entirely in memory.
///
/// Supports balances, allowances, minting, and a block list: any transfer
/// whose sender, source or recipient is blocked is rejected with `false`,
/// which lets callers exercise the pool's abort paths.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Address, Amount};
/// use hydra_dex::ledger::MemoryToken;
/// use hydra_dex::traits::TokenLedger;
///
/// let alice = Address::repeat_byte(1);
/// let bob = Address::repeat_byte(2);
/// let mut token = MemoryToken::new(Address::repeat_byte(9));
/// token.mint(&alice, Amount::new(100)).expect("mint");
/// assert!(token.transfer(&alice, &bob, Amount::new(40)));
/// assert_eq!(token.balance_of(&bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryToken {
    address: Address,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    blocked: HashSet<Address>,
}

impl MemoryToken {
    /// Creates an empty token living at `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// The token contract's own account.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Total minted supply.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Creates `amount` new tokens in `to`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if
    /// the supply would exceed 256 bits.
    pub fn mint(&mut self, to: &Address, amount: Amount) -> Result<()> {
        let supply = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(to).safe_add(&amount)?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        Ok(())
    }

    /// Sets the allowance `owner` grants to `spender`, replacing any
    /// previous value.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        self.allowances.insert((*owner, *spender), amount);
    }

    /// Remaining allowance `owner` has granted to `spender`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Makes every transfer touching `account` fail.
    pub fn block(&mut self, account: &Address) {
        self.blocked.insert(*account);
    }

    /// Lifts a block placed by [`block`](Self::block).
    pub fn unblock(&mut self, account: &Address) {
        self.blocked.remove(account);
    }

    fn is_blocked(&self, accounts: &[&Address]) -> bool {
        accounts.iter().any(|a| self.blocked.contains(*a))
    }

    /// Moves tokens between balances, or returns `false` without touching
    /// anything.
    fn move_balance(&mut self, from: &Address, to: &Address, amount: Amount) -> bool {
        let Some(debited) = self.balance_of(from).checked_sub(&amount) else {
            return false;
        };
        if from == to {
            return true;
        }
        let Some(credited) = self.balance_of(to).checked_add(&amount) else {
            return false;
        };
        self.balances.insert(*from, debited);
        self.balances.insert(*to, credited);
        true
    }
}

impl TokenLedger for MemoryToken {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(&mut self, sender: &Address, to: &Address, amount: Amount) -> bool {
        if self.is_blocked(&[sender, to]) {
            debug!(%sender, %to, %amount, "token transfer blocked");
            return false;
        }
        self.move_balance(sender, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> bool {
        if self.is_blocked(&[spender, from, to]) {
            debug!(%spender, %from, %to, %amount, "token transfer_from blocked");
            return false;
        }
        let Some(remaining) = self.allowance(from, spender).checked_sub(&amount) else {
            debug!(%spender, %from, %amount, "allowance too small");
            return false;
        };
        if !self.move_balance(from, to, amount) {
            return false;
        }
        self.allowances.insert((*from, *spender), remaining);
        true
    }
}
