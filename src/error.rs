//! Unified error types for the Hydra DEX library.
//!
//! All fallible operations across the crate return [`DexError`] as their
//! error type.  Every failure is a synchronous, reason-carrying abort:
//! there is no partial-success return value.
//!
//! # Taxonomy
//!
//! | Class | Variants |
//! |-------|----------|
//! | Precondition violation | [`AlreadyInitialized`](DexError::AlreadyInitialized), [`NotInitialized`](DexError::NotInitialized), [`ZeroAmount`](DexError::ZeroAmount), [`NonPayable`](DexError::NonPayable), [`InsufficientLiquidity`](DexError::InsufficientLiquidity), [`InsufficientShares`](DexError::InsufficientShares), [`InsufficientFunds`](DexError::InsufficientFunds) |
//! | External transfer failure | [`TransferFailed`](DexError::TransferFailed), [`SendFailed`](DexError::SendFailed), [`Reentrancy`](DexError::Reentrancy) |
//! | Arithmetic fault | [`Overflow`](DexError::Overflow), [`Underflow`](DexError::Underflow), [`DivisionByZero`](DexError::DivisionByZero) |
//! | Configuration | [`InvalidAddress`](DexError::InvalidAddress), [`InvalidConfiguration`](DexError::InvalidConfiguration), [`ConfigParse`](DexError::ConfigParse) |

use thiserror::Error;

/// Crate-wide error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DexError {
    /// `init` was called on a pool that already has liquidity.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// An operation that needs reserves was called before `init`.
    #[error("pool is not initialized")]
    NotInitialized,

    /// A required amount was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// Value was attached to an operation that does not accept it.
    #[error("operation does not accept attached value")]
    NonPayable,

    /// The pool cannot honor the quoted output from its reserves.
    #[error("insufficient pool liquidity")]
    InsufficientLiquidity,

    /// The caller tried to redeem more LP units than it owns.
    #[error("insufficient LP units: {0}")]
    InsufficientShares(&'static str),

    /// The caller cannot fund the value attached to the call.
    #[error("insufficient native funds to attach value")]
    InsufficientFunds,

    /// The token collaborator rejected a transfer.
    #[error("token transfer failed: {0}")]
    TransferFailed(&'static str),

    /// The native-asset send primitive rejected a payout.
    #[error("native send failed: {0}")]
    SendFailed(&'static str),

    /// A collaborator tried to re-enter the pool during an operation.
    #[error("reentrant call rejected")]
    Reentrancy,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An address could not be parsed or is not allowed here.
    #[error("invalid address: {0}")]
    InvalidAddress(&'static str),

    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl DexError {
    /// Returns `true` for arithmetic faults (overflow, underflow, division
    /// by zero).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Overflow(_) | Self::Underflow(_) | Self::DivisionByZero
        )
    }

    /// Returns `true` when a collaborator refused a transfer or re-entered.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::TransferFailed(_) | Self::SendFailed(_) | Self::Reentrancy
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DexError>;
