//! LP-unit ledger: total supply and per-account balances.

use std::collections::BTreeMap;

use crate::domain::{Address, Liquidity};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;

/// Outstanding LP units and who holds them.
///
/// # Invariant
///
/// ```text
/// total == Σ balances[account]
/// ```
///
/// [`mint`](Self::mint) and [`burn`](Self::burn) compute every new value
/// before writing any of them, so a failed call leaves the book exactly
/// as it was.  An account gets an entry the first time it is credited a
/// non-zero amount and keeps it (possibly at zero) afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiquidityBook {
    total: Liquidity,
    balances: BTreeMap<Address, Liquidity>,
}

impl LiquidityBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total outstanding LP units.
    #[must_use]
    pub const fn total(&self) -> Liquidity {
        self.total
    }

    /// LP units held by `account`; zero for unknown accounts.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Liquidity {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Credits `amount` LP units to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the balance or total would exceed
    /// 256 bits.
    pub fn mint(&mut self, owner: &Address, amount: Liquidity) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let total = self.total.safe_add(&amount)?;
        let balance = self.balance_of(owner).safe_add(&amount)?;
        self.total = total;
        self.balances.insert(*owner, balance);
        Ok(())
    }

    /// Debits `amount` LP units from `owner`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientShares`] if `owner` holds fewer than
    ///   `amount` units.
    /// - [`DexError::Underflow`] if the total would go negative, which
    ///   means the book was already inconsistent.
    pub fn burn(&mut self, owner: &Address, amount: Liquidity) -> Result<()> {
        let balance = self.balance_of(owner);
        if balance < amount {
            return Err(DexError::InsufficientShares(
                "withdrawal exceeds LP balance",
            ));
        }
        let remaining = balance.safe_sub(&amount)?;
        let total = self.total.safe_sub(&amount)?;
        self.total = total;
        if self.balances.contains_key(owner) {
            self.balances.insert(*owner, remaining);
        }
        Ok(())
    }

    /// Iterates over every account that has ever held LP units.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Liquidity)> {
        self.balances.iter()
    }

    /// Returns `true` if the total equals the sum of all balances.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.balances
            .values()
            .try_fold(Liquidity::ZERO, |acc, l| acc.checked_add(l))
            .is_some_and(|sum| sum == self.total)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::repeat_byte(1)
    }

    fn bob() -> Address {
        Address::repeat_byte(2)
    }

    #[test]
    fn empty_book() {
        let book = LiquidityBook::new();
        assert!(book.total().is_zero());
        assert!(book.balance_of(&alice()).is_zero());
        assert!(book.is_consistent());
        assert_eq!(book.holders().count(), 0);
    }

    #[test]
    fn mint_credits_owner_and_total() {
        let mut book = LiquidityBook::new();
        let Ok(()) = book.mint(&alice(), Liquidity::new(100)) else {
            panic!("mint");
        };
        let Ok(()) = book.mint(&bob(), Liquidity::new(50)) else {
            panic!("mint");
        };
        assert_eq!(book.total(), Liquidity::new(150));
        assert_eq!(book.balance_of(&alice()), Liquidity::new(100));
        assert!(book.is_consistent());
    }

    #[test]
    fn zero_mint_creates_no_entry() {
        let mut book = LiquidityBook::new();
        let Ok(()) = book.mint(&alice(), Liquidity::ZERO) else {
            panic!("mint");
        };
        assert_eq!(book.holders().count(), 0);
    }

    #[test]
    fn burn_debits_owner_and_total() {
        let mut book = LiquidityBook::new();
        let Ok(()) = book.mint(&alice(), Liquidity::new(100)) else {
            panic!("mint");
        };
        let Ok(()) = book.burn(&alice(), Liquidity::new(100)) else {
            panic!("burn");
        };
        assert!(book.total().is_zero());
        // The entry survives at zero.
        assert_eq!(book.holders().count(), 1);
        assert!(book.is_consistent());
    }

    #[test]
    fn burn_beyond_balance_leaves_book_untouched() {
        let mut book = LiquidityBook::new();
        let Ok(()) = book.mint(&alice(), Liquidity::new(10)) else {
            panic!("mint");
        };
        let Ok(()) = book.mint(&bob(), Liquidity::new(10)) else {
            panic!("mint");
        };
        let before = book.clone();
        let Err(DexError::InsufficientShares(_)) = book.burn(&alice(), Liquidity::new(11)) else {
            panic!("expected InsufficientShares");
        };
        assert_eq!(book, before);
    }

    #[test]
    fn zero_burn_for_unknown_account() {
        let mut book = LiquidityBook::new();
        let Ok(()) = book.burn(&alice(), Liquidity::ZERO) else {
            panic!("burn");
        };
        assert_eq!(book.holders().count(), 0);
    }
}
