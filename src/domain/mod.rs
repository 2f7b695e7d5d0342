//! Fundamental domain value types used throughout the pool.
//!
//! Accounts, 256-bit amounts, LP units, reserve snapshots and the records
//! emitted by committed operations.  All numeric types are newtypes with
//! checked arithmetic so no operation can silently wrap.

mod address;
mod amount;
mod event;
mod liquidity;
mod reserves;
mod rounding;

pub use address::{Address, ADDRESS_LEN};
pub use amount::Amount;
pub use event::PoolEvent;
pub use liquidity::Liquidity;
pub use reserves::Reserves;
pub use rounding::Rounding;
