//! Transactional executor for a [`Dex`] and its collaborators.
//!
//! [`Exchange`] owns the pool, a [`NativeBank`], and a token ledger and
//! runs every handler as one all-or-nothing call:
//!
//! 1. Lock the exchange.  Other threads wait here, so calls are serialized.
//! 2. Reject the call with [`DexError::Reentrancy`] if this thread is
//!    already inside a call.
//! 3. Copy the committed world and move the attached value from the caller
//!    to the pool in the copy.
//! 4. Run the handler against the copy.
//! 5. On success, replace the committed world with the copy and publish the
//!    staged events.  On failure, drop the copy.
//!
//! A token that calls back into the exchange from `transfer` or
//! `transfer_from` therefore gets `Reentrancy` instead of a view of a
//! half-finished call, and every failure leaves balances, LP units, and
//! the event log exactly as they were.

use std::cell::{Cell, RefCell};

use parking_lot::ReentrantMutex;
use tracing::{debug, info, warn};

use crate::config::DexConfig;
use crate::domain::{Address, Amount, Liquidity, PoolEvent, Reserves};
use crate::error::{DexError, Result};
use crate::ledger::NativeBank;
use crate::pool::{Context, Dex};
use crate::traits::{FromConfig, NativeLedger, TokenLedger};

#[derive(Debug, Clone)]
struct World<T> {
    dex: Dex,
    bank: NativeBank,
    token: T,
}

#[derive(Debug)]
struct Slot<T> {
    busy: Cell<bool>,
    world: RefCell<World<T>>,
    log: RefCell<Vec<PoolEvent>>,
}

/// Clears the in-call flag however the call ends.
struct BusyGuard<'a>(&'a Cell<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A pool, its native bank, and its token, driven one atomic call at a
/// time.
///
/// `Exchange<T>` is `Sync` whenever `T` is `Send`; share it behind an
/// `Arc` to call it from several threads.
///
/// # Examples
///
/// ```
/// use hydra_dex::config::DexConfig;
/// use hydra_dex::domain::{Address, Amount};
/// use hydra_dex::exchange::Exchange;
/// use hydra_dex::ledger::MemoryToken;
///
/// let pool = Address::repeat_byte(0xd0);
/// let lp = Address::repeat_byte(0xa1);
/// let cfg = DexConfig::new(pool, Address::repeat_byte(0x70)).expect("config");
///
/// let mut token = MemoryToken::new(cfg.token_address());
/// token.mint(&lp, Amount::new(10_000)).expect("mint");
/// token.approve(&lp, &pool, Amount::new(10_000));
///
/// let ex = Exchange::new(&cfg, token).expect("exchange");
/// ex.fund(&lp, Amount::new(10_000)).expect("fund");
/// ex.init(&lp, Amount::new(10_000), Amount::new(10_000)).expect("init");
///
/// let trader = Address::repeat_byte(0xb0);
/// ex.fund(&trader, Amount::new(1_000)).expect("fund");
/// let out = ex.eth_to_token(&trader, Amount::new(1_000)).expect("swap");
/// assert_eq!(out, Amount::new(906));
/// ```
pub struct Exchange<T> {
    inner: ReentrantMutex<Slot<T>>,
}

impl<T: TokenLedger + Clone> Exchange<T> {
    /// Builds an empty pool from `config` around an existing token ledger.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`Dex::from_config`].
    pub fn new(config: &DexConfig, token: T) -> Result<Self> {
        let dex = Dex::from_config(config)?;
        info!(pool = %dex.address(), token = %dex.token_address(), "exchange created");
        Ok(Self {
            inner: ReentrantMutex::new(Slot {
                busy: Cell::new(false),
                world: RefCell::new(World {
                    dex,
                    bank: NativeBank::new(),
                    token,
                }),
                log: RefCell::new(Vec::new()),
            }),
        })
    }

    // -- handlers -------------------------------------------------------------

    /// Bootstraps the pool with `value` native units and `tokens` tokens.
    ///
    /// # Errors
    ///
    /// See [`Dex::init`], plus the executor errors listed on
    /// [`Exchange`].
    pub fn init(&self, caller: &Address, value: Amount, tokens: Amount) -> Result<Liquidity> {
        self.execute("init", *caller, value, |dex, cx| dex.init(cx, tokens))
    }

    /// Sells `value` native units for tokens.
    ///
    /// # Errors
    ///
    /// See [`Dex::eth_to_token`].
    pub fn eth_to_token(&self, caller: &Address, value: Amount) -> Result<Amount> {
        self.execute("eth_to_token", *caller, value, |dex, cx| dex.eth_to_token(cx))
    }

    /// Sells `tokens` for native units.
    ///
    /// # Errors
    ///
    /// See [`Dex::token_to_eth`].
    pub fn token_to_eth(&self, caller: &Address, tokens: Amount) -> Result<Amount> {
        self.execute("token_to_eth", *caller, Amount::ZERO, |dex, cx| {
            dex.token_to_eth(cx, tokens)
        })
    }

    /// Like [`token_to_eth`](Self::token_to_eth) but with native value
    /// attached, which the pool rejects.
    ///
    /// # Errors
    ///
    /// Always fails; normally with [`DexError::NonPayable`].
    pub fn token_to_eth_with_value(
        &self,
        caller: &Address,
        value: Amount,
        tokens: Amount,
    ) -> Result<Amount> {
        self.execute("token_to_eth", *caller, value, |dex, cx| {
            dex.token_to_eth(cx, tokens)
        })
    }

    /// Adds `value` native units of liquidity; returns the tokens pulled.
    ///
    /// # Errors
    ///
    /// See [`Dex::deposit`].
    pub fn deposit(&self, caller: &Address, value: Amount) -> Result<Amount> {
        self.execute("deposit", *caller, value, |dex, cx| dex.deposit(cx))
    }

    /// Redeems `amount` LP units; returns `(native, tokens)` paid out.
    ///
    /// # Errors
    ///
    /// See [`Dex::withdraw`].
    pub fn withdraw(&self, caller: &Address, amount: Liquidity) -> Result<(Amount, Amount)> {
        self.execute("withdraw", *caller, Amount::ZERO, |dex, cx| {
            dex.withdraw(cx, amount)
        })
    }

    // -- environment ----------------------------------------------------------

    /// Issues `amount` fresh native units to `account`.
    ///
    /// # Errors
    ///
    /// - [`DexError::Reentrancy`] if called from inside a running handler.
    /// - [`DexError::Overflow`] if the balance would exceed 256 bits.
    pub fn fund(&self, account: &Address, amount: Amount) -> Result<()> {
        self.with_bank(|bank| bank.credit(account, amount))?
    }

    /// Runs `f` against the committed token ledger, for setup such as
    /// minting or approvals.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Reentrancy`] if called from inside a running
    /// handler.
    pub fn with_token<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let slot = self.inner.lock();
        if slot.busy.get() {
            return Err(DexError::Reentrancy);
        }
        let mut world = slot.world.borrow_mut();
        Ok(f(&mut world.token))
    }

    /// Runs `f` against the committed native bank.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Reentrancy`] if called from inside a running
    /// handler.
    pub fn with_bank<R>(&self, f: impl FnOnce(&mut NativeBank) -> R) -> Result<R> {
        let slot = self.inner.lock();
        if slot.busy.get() {
            return Err(DexError::Reentrancy);
        }
        let mut world = slot.world.borrow_mut();
        Ok(f(&mut world.bank))
    }

    // -- reads ----------------------------------------------------------------

    /// Committed native balance of `account`.
    #[must_use]
    pub fn native_balance_of(&self, account: &Address) -> Amount {
        self.read(|w| w.bank.balance_of(account))
    }

    /// Committed token balance of `account`.
    #[must_use]
    pub fn token_balance_of(&self, account: &Address) -> Amount {
        self.read(|w| w.token.balance_of(account))
    }

    /// LP units held by `account` (`getLiquidity`).
    #[must_use]
    pub fn liquidity_of(&self, account: &Address) -> Liquidity {
        self.read(|w| w.dex.liquidity_of(account))
    }

    /// Total outstanding LP units.
    #[must_use]
    pub fn total_liquidity(&self) -> Liquidity {
        self.read(|w| w.dex.total_liquidity())
    }

    /// Committed reserves.
    #[must_use]
    pub fn reserves(&self) -> Reserves {
        self.read(|w| w.dex.reserves(&w.token, &w.bank))
    }

    /// A copy of the committed pool state.
    #[must_use]
    pub fn pool(&self) -> Dex {
        self.read(|w| w.dex.clone())
    }

    /// Every event published so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.inner.lock().log.borrow().clone()
    }

    /// Tokens `value` native units would buy against committed reserves.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic faults from the pricing formula.
    pub fn quote_eth_to_token(&self, value: Amount) -> Result<Amount> {
        self.read(|w| w.dex.quote_eth_to_token(&w.token, &w.bank, value))
    }

    /// Native units `tokens` would buy against committed reserves.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic faults from the pricing formula.
    pub fn quote_token_to_eth(&self, tokens: Amount) -> Result<Amount> {
        self.read(|w| w.dex.quote_token_to_eth(&w.token, &w.bank, tokens))
    }

    // -- internals ------------------------------------------------------------

    fn read<R>(&self, f: impl FnOnce(&World<T>) -> R) -> R {
        let slot = self.inner.lock();
        let world = slot.world.borrow();
        f(&world)
    }

    fn execute<R>(
        &self,
        op: &'static str,
        caller: Address,
        value: Amount,
        handler: impl FnOnce(&mut Dex, &mut Context<'_, T, NativeBank>) -> Result<R>,
    ) -> Result<R> {
        let slot = self.inner.lock();
        if slot.busy.replace(true) {
            warn!(op, %caller, "re-entrant call rejected");
            return Err(DexError::Reentrancy);
        }
        let _busy = BusyGuard(&slot.busy);

        let mut world = slot.world.borrow().clone();
        let pool = world.dex.address();
        if !world.bank.send(&caller, &pool, value) {
            debug!(op, %caller, %value, "caller cannot cover attached value");
            return Err(DexError::InsufficientFunds);
        }

        let mut staged = Vec::new();
        let result = {
            let World { dex, bank, token } = &mut world;
            let mut cx = Context::new(caller, value, token, bank, &mut staged);
            handler(dex, &mut cx)
        };

        match result {
            Ok(out) => {
                *slot.world.borrow_mut() = world;
                slot.log.borrow_mut().extend(staged);
                debug!(op, %caller, "call committed");
                Ok(out)
            }
            Err(err) => {
                warn!(op, %caller, error = %err, "call reverted");
                Err(err)
            }
        }
    }
}
