//! Construction from a validated configuration.
//!
//! [`FromConfig`] gives every configurable component a uniform
//! constructor.  Implementations validate the configuration before
//! building anything, so a successfully constructed value always starts
//! in a valid state.
//!
//! ```text
//! DexConfig ──from_config──▶ Dex (empty, pre-bootstrap)
//! ```

use crate::error::DexError;

/// Builds `Self` from a configuration of type `C`.
///
/// There is no blanket implementation: each pairing of component and
/// configuration is written out explicitly.
///
/// # Implementors
///
/// - `impl FromConfig<DexConfig> for Dex`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference so callers can reuse it,
    /// for example to build a second, independent pool in tests.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidConfiguration`] if any parameter is out of
    ///   range or inconsistent.
    fn from_config(config: &C) -> Result<Self, DexError>
    where
        Self: Sized;
}
