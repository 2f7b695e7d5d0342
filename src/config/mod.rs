//! Declarative pool blueprints.
//!
//! A [`DexConfig`] fully describes a pool's immutable parameters and can
//! be built in code or loaded from TOML.  It is turned into a live pool
//! through [`FromConfig`](crate::traits::FromConfig).

mod dex;

pub use dex::DexConfig;
