//! Observability records emitted by committed pool operations.

use core::fmt;

use super::{Address, Amount, Liquidity};

/// A record emitted by a successful swap or liquidity operation.
///
/// Records are staged with the operation and only become visible once it
/// commits; an aborted call leaves no record behind.  Each variant carries
/// the acting account, the operation's primary amount, and both asset
/// deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// Native asset sold for tokens.
    EthToTokenSwap {
        /// Caller that sent the native asset.
        swapper: Address,
        /// Tokens paid out by the pool.
        token_output: Amount,
        /// Native asset received by the pool.
        eth_input: Amount,
    },
    /// Tokens sold for the native asset.
    TokenToEthSwap {
        /// Caller that sold the tokens.
        swapper: Address,
        /// Tokens received by the pool.
        tokens_input: Amount,
        /// Native asset paid out by the pool.
        eth_output: Amount,
    },
    /// Liquidity added through `deposit`.
    LiquidityProvided {
        /// Depositing account.
        provider: Address,
        /// LP units credited.
        liquidity_minted: Liquidity,
        /// Native asset deposited.
        eth_input: Amount,
        /// Tokens pulled from the provider.
        tokens_input: Amount,
    },
    /// Liquidity redeemed through `withdraw`.
    LiquidityRemoved {
        /// Redeeming account.
        provider: Address,
        /// LP units burned.
        liquidity_withdrawn: Liquidity,
        /// Tokens paid out.
        tokens_output: Amount,
        /// Native asset paid out.
        eth_output: Amount,
    },
}

impl PoolEvent {
    /// The account that performed the operation.
    #[must_use]
    pub const fn account(&self) -> Address {
        match self {
            Self::EthToTokenSwap { swapper, .. } | Self::TokenToEthSwap { swapper, .. } => {
                *swapper
            }
            Self::LiquidityProvided { provider, .. } | Self::LiquidityRemoved { provider, .. } => {
                *provider
            }
        }
    }

    /// Short record name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EthToTokenSwap { .. } => "EthToTokenSwap",
            Self::TokenToEthSwap { .. } => "TokenToEthSwap",
            Self::LiquidityProvided { .. } => "LiquidityProvided",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EthToTokenSwap {
                swapper,
                token_output,
                eth_input,
            } => write!(f, "{}({swapper}, out={token_output}, in={eth_input})", self.name()),
            Self::TokenToEthSwap {
                swapper,
                tokens_input,
                eth_output,
            } => write!(f, "{}({swapper}, in={tokens_input}, out={eth_output})", self.name()),
            Self::LiquidityProvided {
                provider,
                liquidity_minted,
                eth_input,
                tokens_input,
            } => write!(
                f,
                "{}({provider}, lp={liquidity_minted}, eth={eth_input}, tokens={tokens_input})",
                self.name()
            ),
            Self::LiquidityRemoved {
                provider,
                liquidity_withdrawn,
                tokens_output,
                eth_output,
            } => write!(
                f,
                "{}({provider}, lp={liquidity_withdrawn}, tokens={tokens_output}, eth={eth_output})",
                self.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_actor() {
        let who = Address::repeat_byte(7);
        let ev = PoolEvent::TokenToEthSwap {
            swapper: who,
            tokens_input: Amount::new(1),
            eth_output: Amount::new(2),
        };
        assert_eq!(ev.account(), who);
        assert_eq!(ev.name(), "TokenToEthSwap");
    }

    #[test]
    fn display_includes_amounts() {
        let ev = PoolEvent::LiquidityRemoved {
            provider: Address::repeat_byte(1),
            liquidity_withdrawn: Liquidity::new(5),
            tokens_output: Amount::new(6),
            eth_output: Amount::new(7),
        };
        let text = ev.to_string();
        assert!(text.starts_with("LiquidityRemoved("));
        assert!(text.contains("lp=5"));
        assert!(text.contains("eth=7"));
    }
}
