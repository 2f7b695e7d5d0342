//! The exchange pool and its per-call plumbing.
//!
//! - [`Dex`] holds the pool's identity and its LP book and implements the
//!   five handlers.
//! - [`Context`] carries the caller, the attached value, and both
//!   collaborators into a handler.
//! - [`LiquidityBook`] tracks LP units.

mod context;
mod dex;
mod shares;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use context::Context;
pub use dex::Dex;
pub use shares::LiquidityBook;
