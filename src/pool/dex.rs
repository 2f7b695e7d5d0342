//! The native/token exchange pool.
//!
//! # Operations
//!
//! | Operation | Value | Returns |
//! |-----------|-------|---------|
//! | [`init`](Dex::init) | native seed | LP units minted |
//! | [`eth_to_token`](Dex::eth_to_token) | native input | tokens out |
//! | [`token_to_eth`](Dex::token_to_eth) | none | native out |
//! | [`deposit`](Dex::deposit) | native input | tokens pulled |
//! | [`withdraw`](Dex::withdraw) | none | `(native, tokens)` out |
//!
//! # Reserves
//!
//! Neither reserve is stored.  The native reserve is the pool account's
//! live native balance and the token reserve is the token's live
//! `balance_of(pool)`.  Payable operations subtract the attached value to
//! recover the reserve as it stood before the call.
//!
//! # Ordering
//!
//! Every handler validates, computes all quantities from reserves read at
//! entry, writes the LP book, and only then calls out to a collaborator.
//! A collaborator that re-enters therefore sees the post-debit book.

use tracing::{debug, info, warn};

use super::{Context, LiquidityBook};
use crate::config::DexConfig;
use crate::domain::{Address, Amount, Liquidity, PoolEvent, Reserves, Rounding};
use crate::error::{DexError, Result};
use crate::math::{price, CheckedArithmetic};
use crate::traits::{FromConfig, NativeLedger, TokenLedger};

/// Pool ledger for a native asset paired with one fungible token.
///
/// Created empty from a [`DexConfig`]; bootstrapped once with
/// [`init`](Self::init).  All mutation goes through the handlers below,
/// each of which receives its collaborators through a [`Context`].
///
/// Handlers are not atomic on their own: a handler that fails after a
/// collaborator has moved funds leaves those moves in place.  Run them
/// through [`Exchange`](crate::exchange::Exchange), or any other
/// executor that discards a failed call's effects.
///
/// # Example
///
/// ```rust
/// use hydra_dex::config::DexConfig;
/// use hydra_dex::domain::{Address, Amount};
/// use hydra_dex::ledger::{MemoryToken, NativeBank};
/// use hydra_dex::pool::{Context, Dex};
/// use hydra_dex::traits::{FromConfig, NativeLedger};
///
/// let pool_addr = Address::repeat_byte(0xd0);
/// let alice = Address::repeat_byte(0xa1);
/// let cfg = DexConfig::new(pool_addr, Address::repeat_byte(0x70)).expect("config");
/// let mut dex = Dex::from_config(&cfg).expect("pool");
///
/// let mut token = MemoryToken::new(cfg.token_address());
/// token.mint(&alice, Amount::new(5_000)).expect("mint");
/// token.approve(&alice, &pool_addr, Amount::new(5_000));
/// let mut bank = NativeBank::new();
/// bank.credit(&alice, Amount::new(1_000)).expect("credit");
/// let mut events = Vec::new();
///
/// // Attach the value first, then run the handler.
/// assert!(bank.send(&alice, &pool_addr, Amount::new(1_000)));
/// let mut cx = Context::new(alice, Amount::new(1_000), &mut token, &mut bank, &mut events);
/// let minted = dex.init(&mut cx, Amount::new(5_000)).expect("init");
/// assert_eq!(minted.get(), Amount::new(1_000).get());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dex {
    address: Address,
    token_address: Address,
    book: LiquidityBook,
}

impl FromConfig<DexConfig> for Dex {
    /// Creates an empty, pre-bootstrap pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`DexConfig::validate`].
    fn from_config(config: &DexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            address: config.pool_address(),
            token_address: config.token_address(),
            book: LiquidityBook::new(),
        })
    }
}

impl Dex {
    /// The pool's own account.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The account of the token this pool trades.
    #[must_use]
    pub const fn token_address(&self) -> Address {
        self.token_address
    }

    /// Total outstanding LP units.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.book.total()
    }

    /// LP units held by `account` (`getLiquidity`).
    #[must_use]
    pub fn liquidity_of(&self, account: &Address) -> Liquidity {
        self.book.balance_of(account)
    }

    /// Read access to the LP book.
    #[must_use]
    pub const fn book(&self) -> &LiquidityBook {
        &self.book
    }

    /// Returns `true` once `init` has minted the first LP units and until
    /// every unit has been withdrawn.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.book.total().is_zero()
    }

    /// Live reserves read from the collaborators.
    #[must_use]
    pub fn reserves<T: TokenLedger, N: NativeLedger>(&self, token: &T, native: &N) -> Reserves {
        Reserves::new(
            native.balance_of(&self.address),
            token.balance_of(&self.address),
        )
    }

    /// Quotes how many tokens `eth_input` would buy right now.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic faults from [`price`].
    pub fn quote_eth_to_token<T: TokenLedger, N: NativeLedger>(
        &self,
        token: &T,
        native: &N,
        eth_input: Amount,
    ) -> Result<Amount> {
        let reserves = self.reserves(token, native);
        price(eth_input, reserves.native(), reserves.token())
    }

    /// Quotes how much native asset `tokens_input` would buy right now.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic faults from [`price`].
    pub fn quote_token_to_eth<T: TokenLedger, N: NativeLedger>(
        &self,
        token: &T,
        native: &N,
        tokens_input: Amount,
    ) -> Result<Amount> {
        let reserves = self.reserves(token, native);
        price(tokens_input, reserves.token(), reserves.native())
    }

    /// Seeds the pool.  Payable.
    ///
    /// Every native unit the pool now holds becomes one LP unit credited
    /// to the caller, and `tokens` are pulled from the caller.  The ratio
    /// the caller chooses becomes the opening price.
    ///
    /// # Errors
    ///
    /// - [`DexError::AlreadyInitialized`] if LP units already exist.
    /// - [`DexError::ZeroAmount`] if no value is attached or `tokens` is
    ///   zero.
    /// - [`DexError::TransferFailed`] if the token pull is rejected.
    pub fn init<T: TokenLedger, N: NativeLedger>(
        &mut self,
        cx: &mut Context<'_, T, N>,
        tokens: Amount,
    ) -> Result<Liquidity> {
        if self.is_initialized() {
            return Err(DexError::AlreadyInitialized);
        }
        if cx.value().is_zero() {
            return Err(DexError::ZeroAmount("bootstrap native value"));
        }
        if tokens.is_zero() {
            return Err(DexError::ZeroAmount("bootstrap tokens"));
        }

        let caller = cx.caller();
        let liquidity = Liquidity::from_amount(cx.native().balance_of(&self.address));
        self.book.mint(&caller, liquidity)?;

        if !cx
            .token_mut()
            .transfer_from(&self.address, &caller, &self.address, tokens)
        {
            warn!(%caller, %tokens, "bootstrap token pull rejected");
            return Err(DexError::TransferFailed("bootstrap token pull"));
        }

        info!(%caller, %liquidity, %tokens, "pool initialized");
        Ok(self.book.total())
    }

    /// Sells the attached native value for tokens.  Payable.
    ///
    /// # Errors
    ///
    /// - [`DexError::ZeroAmount`] if no value is attached.
    /// - [`DexError::NotInitialized`] before `init`.
    /// - [`DexError::InsufficientLiquidity`] if the token reserve cannot
    ///   cover the quote.
    /// - [`DexError::TransferFailed`] if the token payout is rejected.
    /// - Arithmetic faults from [`price`].
    pub fn eth_to_token<T: TokenLedger, N: NativeLedger>(
        &mut self,
        cx: &mut Context<'_, T, N>,
    ) -> Result<Amount> {
        let eth_input = cx.value();
        if eth_input.is_zero() {
            return Err(DexError::ZeroAmount("native input"));
        }
        if !self.is_initialized() {
            return Err(DexError::NotInitialized);
        }

        let eth_reserve = self.native_reserve_before_call(cx)?;
        let token_reserve = cx.token().balance_of(&self.address);
        let token_output = price(eth_input, eth_reserve, token_reserve)?;
        debug!(%eth_input, %eth_reserve, %token_reserve, %token_output, "eth_to_token quote");

        if token_reserve < token_output {
            return Err(DexError::InsufficientLiquidity);
        }

        let caller = cx.caller();
        if !cx.token_mut().transfer(&self.address, &caller, token_output) {
            warn!(%caller, %token_output, "token payout rejected");
            return Err(DexError::TransferFailed("swap token payout"));
        }

        cx.emit(PoolEvent::EthToTokenSwap {
            swapper: caller,
            token_output,
            eth_input,
        });
        info!(%caller, %eth_input, %token_output, "swapped native for tokens");
        Ok(token_output)
    }

    /// Sells `tokens_input` tokens for native value.  Not payable.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonPayable`] if value is attached.
    /// - [`DexError::ZeroAmount`] if `tokens_input` is zero.
    /// - [`DexError::NotInitialized`] before `init`.
    /// - [`DexError::InsufficientLiquidity`] if the native reserve cannot
    ///   cover the quote.
    /// - [`DexError::TransferFailed`] if the token pull is rejected.
    /// - [`DexError::SendFailed`] if the native payout is rejected.
    pub fn token_to_eth<T: TokenLedger, N: NativeLedger>(
        &mut self,
        cx: &mut Context<'_, T, N>,
        tokens_input: Amount,
    ) -> Result<Amount> {
        Self::reject_value(cx)?;
        if tokens_input.is_zero() {
            return Err(DexError::ZeroAmount("token input"));
        }
        if !self.is_initialized() {
            return Err(DexError::NotInitialized);
        }

        let token_reserve = cx.token().balance_of(&self.address);
        let eth_reserve = cx.native().balance_of(&self.address);
        let eth_output = price(tokens_input, token_reserve, eth_reserve)?;
        debug!(%tokens_input, %token_reserve, %eth_reserve, %eth_output, "token_to_eth quote");

        if eth_reserve < eth_output {
            return Err(DexError::InsufficientLiquidity);
        }

        let caller = cx.caller();
        if !cx
            .token_mut()
            .transfer_from(&self.address, &caller, &self.address, tokens_input)
        {
            warn!(%caller, %tokens_input, "token pull rejected");
            return Err(DexError::TransferFailed("swap token pull"));
        }
        if !cx.native_mut().send(&self.address, &caller, eth_output) {
            warn!(%caller, %eth_output, "native payout rejected");
            return Err(DexError::SendFailed("swap native payout"));
        }

        cx.emit(PoolEvent::TokenToEthSwap {
            swapper: caller,
            tokens_input,
            eth_output,
        });
        info!(%caller, %tokens_input, %eth_output, "swapped tokens for native");
        Ok(eth_output)
    }

    /// Adds liquidity in proportion to the current reserves.  Payable.
    ///
    /// ```text
    /// token_deposit    = value × token_reserve / eth_reserve + 1
    /// liquidity_minted = value × total_liquidity / eth_reserve
    /// ```
    ///
    /// The `+ 1` makes the pool collect at least as many tokens as the
    /// native side implies; the depositor pays at most one extra unit.
    ///
    /// # Errors
    ///
    /// - [`DexError::ZeroAmount`] if no value is attached.
    /// - [`DexError::NotInitialized`] if the native reserve before the
    ///   call is zero or no LP units exist.
    /// - [`DexError::TransferFailed`] if the token pull is rejected.
    /// - Arithmetic faults.
    pub fn deposit<T: TokenLedger, N: NativeLedger>(
        &mut self,
        cx: &mut Context<'_, T, N>,
    ) -> Result<Amount> {
        let eth_input = cx.value();
        if eth_input.is_zero() {
            return Err(DexError::ZeroAmount("native deposit"));
        }

        let eth_reserve = self.native_reserve_before_call(cx)?;
        let total = self.book.total();
        if eth_reserve.is_zero() || total.is_zero() {
            return Err(DexError::NotInitialized);
        }
        let token_reserve = cx.token().balance_of(&self.address);

        let token_deposit = eth_input
            .safe_mul(&token_reserve)?
            .safe_div(&eth_reserve, Rounding::Down)?
            .safe_add(&Amount::new(1))?;
        let liquidity_minted = Liquidity::from_amount(
            eth_input
                .safe_mul(&total.as_amount())?
                .safe_div(&eth_reserve, Rounding::Down)?,
        );
        debug!(%eth_input, %eth_reserve, %token_reserve, %token_deposit, %liquidity_minted, "deposit quote");

        let caller = cx.caller();
        self.book.mint(&caller, liquidity_minted)?;

        if !cx
            .token_mut()
            .transfer_from(&self.address, &caller, &self.address, token_deposit)
        {
            warn!(%caller, %token_deposit, "deposit token pull rejected");
            return Err(DexError::TransferFailed("deposit token pull"));
        }

        cx.emit(PoolEvent::LiquidityProvided {
            provider: caller,
            liquidity_minted,
            eth_input,
            tokens_input: token_deposit,
        });
        info!(%caller, %eth_input, %token_deposit, %liquidity_minted, "liquidity provided");
        Ok(token_deposit)
    }

    /// Redeems `amount` LP units for a pro-rata share of both reserves.
    /// Not payable.
    ///
    /// ```text
    /// eth_withdrawn = amount × eth_reserve   / total_liquidity
    /// token_amount  = amount × token_reserve / total_liquidity
    /// ```
    ///
    /// The caller's units are burned before either payout is attempted.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonPayable`] if value is attached.
    /// - [`DexError::ZeroAmount`] if `amount` is zero.
    /// - [`DexError::InsufficientShares`] if the caller holds fewer than
    ///   `amount` units.
    /// - [`DexError::SendFailed`] if the native payout is rejected.
    /// - [`DexError::TransferFailed`] if the token payout is rejected.
    pub fn withdraw<T: TokenLedger, N: NativeLedger>(
        &mut self,
        cx: &mut Context<'_, T, N>,
        amount: Liquidity,
    ) -> Result<(Amount, Amount)> {
        Self::reject_value(cx)?;
        if amount.is_zero() {
            return Err(DexError::ZeroAmount("LP units"));
        }
        let caller = cx.caller();
        if self.book.balance_of(&caller) < amount {
            return Err(DexError::InsufficientShares(
                "withdrawal exceeds LP balance",
            ));
        }

        let total = self.book.total().as_amount();
        let eth_reserve = cx.native().balance_of(&self.address);
        let token_reserve = cx.token().balance_of(&self.address);
        let eth_withdrawn = amount
            .as_amount()
            .safe_mul(&eth_reserve)?
            .safe_div(&total, Rounding::Down)?;
        let token_amount = amount
            .as_amount()
            .safe_mul(&token_reserve)?
            .safe_div(&total, Rounding::Down)?;
        debug!(%amount, %eth_reserve, %token_reserve, %eth_withdrawn, %token_amount, "withdraw quote");

        self.book.burn(&caller, amount)?;

        if !cx.native_mut().send(&self.address, &caller, eth_withdrawn) {
            warn!(%caller, %eth_withdrawn, "withdrawal native payout rejected");
            return Err(DexError::SendFailed("withdrawal native payout"));
        }
        if !cx.token_mut().transfer(&self.address, &caller, token_amount) {
            warn!(%caller, %token_amount, "withdrawal token payout rejected");
            return Err(DexError::TransferFailed("withdrawal token payout"));
        }

        cx.emit(PoolEvent::LiquidityRemoved {
            provider: caller,
            liquidity_withdrawn: amount,
            tokens_output: token_amount,
            eth_output: eth_withdrawn,
        });
        info!(%caller, %amount, %eth_withdrawn, %token_amount, "liquidity removed");
        Ok((eth_withdrawn, token_amount))
    }

    /// Native reserve as it stood before the value attached to this call
    /// arrived.
    fn native_reserve_before_call<T: TokenLedger, N: NativeLedger>(
        &self,
        cx: &Context<'_, T, N>,
    ) -> Result<Amount> {
        cx.native()
            .balance_of(&self.address)
            .checked_sub(&cx.value())
            .ok_or(DexError::Underflow("attached value exceeds pool balance"))
    }

    fn reject_value<T: TokenLedger, N: NativeLedger>(cx: &Context<'_, T, N>) -> Result<()> {
        if cx.value().is_zero() {
            Ok(())
        } else {
            Err(DexError::NonPayable)
        }
    }
}
