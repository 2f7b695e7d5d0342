//! Account address.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DexError;

/// Number of bytes in an account address.
pub const ADDRESS_LEN: usize = 20;

/// An account on the settlement layer: an externally owned caller, the
/// pool itself, or the token contract.
///
/// Wraps a fixed-size `[u8; 20]`.  All byte sequences are valid, so
/// construction from bytes is infallible; parsing from text accepts
/// 40 hex digits with an optional `0x` prefix.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Address;
///
/// let addr: Address = "0x0101010101010101010101010101010101010101".parse().expect("hex");
/// assert_eq!(addr, Address::repeat_byte(1));
/// assert_eq!(addr.to_string(), "0x0101010101010101010101010101010101010101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an address whose every byte is `byte`.  Handy for fixtures.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; ADDRESS_LEN])
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for Address {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(DexError::InvalidAddress("expected 40 hex digits"));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| DexError::InvalidAddress("non-hex character"))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = DexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; ADDRESS_LEN];
        assert_eq!(Address::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn zero_is_all_zeros() {
        assert!(Address::zero().is_zero());
        assert!(!Address::repeat_byte(1).is_zero());
        assert_eq!(Address::default(), Address::zero());
    }

    #[test]
    fn parse_without_prefix() {
        let Ok(addr) = "ffffffffffffffffffffffffffffffffffffffff".parse::<Address>() else {
            panic!("valid hex");
        };
        assert_eq!(addr, Address::repeat_byte(0xff));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let Err(err) = "0x1234".parse::<Address>() else {
            panic!("expected length error");
        };
        assert_eq!(err, DexError::InvalidAddress("expected 40 hex digits"));
    }

    #[test]
    fn parse_rejects_non_hex() {
        let text = format!("0x{}", "zz".repeat(ADDRESS_LEN));
        assert!(text.parse::<Address>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(
            Address::repeat_byte(0xab).to_string(),
            format!("0x{}", "ab".repeat(ADDRESS_LEN))
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Address::repeat_byte(0) < Address::repeat_byte(1));
    }
}
