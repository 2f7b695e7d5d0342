//! In-memory native-asset balances.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Address, Amount};
use crate::error::Result;
use crate::math::CheckedArithmetic;
use crate::traits::NativeLedger;

/// Native balances for every account, plus a set of accounts that refuse
/// incoming value the way a contract without a payable receiver would.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Address, Amount};
/// use hydra_dex::ledger::NativeBank;
/// use hydra_dex::traits::NativeLedger;
///
/// let alice = Address::repeat_byte(1);
/// let vault = Address::repeat_byte(2);
/// let mut bank = NativeBank::new();
/// bank.credit(&alice, Amount::new(10)).expect("credit");
/// bank.refuse_incoming(&vault);
/// assert!(!bank.send(&alice, &vault, Amount::new(1)));
/// assert_eq!(bank.balance_of(&alice), Amount::new(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeBank {
    balances: HashMap<Address, Amount>,
    refusing: HashSet<Address>,
}

impl NativeBank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds freshly issued value to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if
    /// the balance would exceed 256 bits.
    pub fn credit(&mut self, account: &Address, amount: Amount) -> Result<()> {
        let balance = self.balance_of(account).safe_add(&amount)?;
        self.balances.insert(*account, balance);
        Ok(())
    }

    /// Makes every send to `account` fail.
    pub fn refuse_incoming(&mut self, account: &Address) {
        self.refusing.insert(*account);
    }

    /// Lets `account` receive value again.
    pub fn accept_incoming(&mut self, account: &Address) {
        self.refusing.remove(account);
    }
}

impl NativeLedger for NativeBank {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn send(&mut self, from: &Address, to: &Address, amount: Amount) -> bool {
        if self.refusing.contains(to) {
            debug!(%from, %to, %amount, "recipient refused value");
            return false;
        }
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
