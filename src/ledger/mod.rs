//! In-memory collaborators.
//!
//! [`MemoryToken`] implements [`TokenLedger`](crate::traits::TokenLedger)
//! and [`NativeBank`] implements [`NativeLedger`](crate::traits::NativeLedger).
//! Both report rejection with `false` and leave their state untouched when
//! they do, so the pool's abort paths can be driven deterministically.

mod memory_token;
mod native_bank;

pub use memory_token::MemoryToken;
pub use native_bank::NativeBank;
