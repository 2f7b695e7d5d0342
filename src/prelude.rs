//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_dex::prelude::*;
//! ```

pub use crate::config::DexConfig;
pub use crate::domain::{Address, Amount, Liquidity, PoolEvent, Reserves, Rounding};
pub use crate::error::{DexError, Result};
pub use crate::exchange::Exchange;
pub use crate::ledger::{MemoryToken, NativeBank};
pub use crate::math::{price, CheckedArithmetic};
pub use crate::pool::{Context, Dex, LiquidityBook};
pub use crate::traits::{FromConfig, NativeLedger, TokenLedger};
