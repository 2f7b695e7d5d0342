//! Configuration for a native/token exchange pool.

use serde::Deserialize;

use crate::domain::Address;
use crate::error::DexError;

/// Immutable parameters of a pool: its own account and the token it
/// trades against the native asset.
///
/// The fee is fixed at 0.3% and is not configurable.
///
/// # Validation
///
/// - Neither address may be the zero address.
/// - The pool and token addresses must differ.
///
/// # Examples
///
/// ```
/// use hydra_dex::config::DexConfig;
///
/// let cfg = DexConfig::from_toml_str(r#"
///     pool_address  = "0x1111111111111111111111111111111111111111"
///     token_address = "0x2222222222222222222222222222222222222222"
/// "#).expect("valid config");
/// assert_ne!(cfg.pool_address(), cfg.token_address());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DexConfig {
    pool_address: Address,
    token_address: Address,
}

impl DexConfig {
    /// Creates a new `DexConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if validation fails.
    pub fn new(pool_address: Address, token_address: Address) -> Result<Self, DexError> {
        let config = Self {
            pool_address,
            token_address,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document with `pool_address` and
    /// `token_address` keys.
    ///
    /// # Errors
    ///
    /// - [`DexError::ConfigParse`] if the document is malformed or an
    ///   address is not 40 hex digits.
    /// - [`DexError::InvalidConfiguration`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, DexError> {
        let config: Self =
            toml::from_str(text).map_err(|e| DexError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] on a zero or shared
    /// address.
    pub fn validate(&self) -> Result<(), DexError> {
        if self.pool_address.is_zero() {
            return Err(DexError::InvalidConfiguration("pool address is zero"));
        }
        if self.token_address.is_zero() {
            return Err(DexError::InvalidConfiguration("token address is zero"));
        }
        if self.pool_address == self.token_address {
            return Err(DexError::InvalidConfiguration(
                "pool and token addresses must differ",
            ));
        }
        Ok(())
    }

    /// The pool's own account.
    #[must_use]
    pub const fn pool_address(&self) -> Address {
        self.pool_address
    }

    /// The token contract's account.
    #[must_use]
    pub const fn token_address(&self) -> Address {
        self.token_address
    }
}
