//! Trait seams between the pool and its collaborators.
//!
//! [`TokenLedger`] and [`NativeLedger`] are the only ways the pool touches
//! the outside world; [`FromConfig`] is the uniform constructor.

mod from_config;
mod native_ledger;
mod token_ledger;

pub use from_config::FromConfig;
pub use native_ledger::NativeLedger;
pub use token_ledger::TokenLedger;
