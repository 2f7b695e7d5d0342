//! # Hydra DEX
//!
//! A constant-product exchange pool for a chain's native asset paired with
//! one fungible token.  Liquidity providers own LP units that represent a
//! pro-rata claim on both reserves; traders swap either asset for the
//! other at a price set by the reserves, with a 0.3 % fee left in the pool.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_dex::prelude::*;
//!
//! let pool = Address::repeat_byte(0xd0);
//! let lp = Address::repeat_byte(0xa1);
//! let trader = Address::repeat_byte(0xb0);
//!
//! // 1. A token ledger with the provider's tokens approved for the pool
//! let cfg = DexConfig::new(pool, Address::repeat_byte(0x70)).expect("valid config");
//! let mut token = MemoryToken::new(cfg.token_address());
//! token.mint(&lp, Amount::new(20_000)).expect("mint");
//! token.approve(&lp, &pool, Amount::new(20_000));
//!
//! // 2. An exchange around it, and some native funds
//! let ex = Exchange::new(&cfg, token).expect("exchange");
//! ex.fund(&lp, Amount::new(10_000)).expect("fund");
//! ex.fund(&trader, Amount::new(1_000)).expect("fund");
//!
//! // 3. Bootstrap at 1 native : 2 tokens
//! let minted = ex.init(&lp, Amount::new(10_000), Amount::new(20_000)).expect("init");
//! assert_eq!(minted, Liquidity::new(10_000));
//!
//! // 4. Swap 1 000 native units for tokens
//! let out = ex.eth_to_token(&trader, Amount::new(1_000)).expect("swap");
//! assert_eq!(out, Amount::new(1_813));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Exchange    │  lock, copy, run, commit or discard
//! └──────┬──────┘
//!        │ Context (caller, value, collaborators, event sink)
//!        ▼
//! ┌─────────────┐
//! │    Dex       │  init, eth_to_token, token_to_eth, deposit, withdraw
//! └──────┬──────┘
//!        │ TokenLedger + NativeLedger traits
//!        ▼
//! ┌─────────────┐
//! │   Ledgers    │  MemoryToken, NativeBank, or your own
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`PoolEvent`](domain::PoolEvent) |
//! | [`math`] | Checked arithmetic, rounding division, and the [`price`](math::price) curve |
//! | [`traits`] | Collaborator seams: [`TokenLedger`](traits::TokenLedger), [`NativeLedger`](traits::NativeLedger), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`DexConfig`](config::DexConfig), buildable in code or from TOML |
//! | [`pool`] | The [`Dex`](pool::Dex) handlers and its LP book |
//! | [`ledger`] | In-memory collaborators |
//! | [`exchange`] | Atomic, serialized, re-entrancy-guarded executor |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
