//! Property-based tests for the pool's pricing and accounting invariants.
//!
//! 1. **Price monotonicity**: a larger input never buys less.
//! 2. **Fee bound**: the fee-adjusted output never exceeds the fee-less
//!    constant-product output and never drains the output reserve.
//! 3. **Product preservation**: `native × token` never decreases across a
//!    swap.
//! 4. **Liquidity round-trip**: deposit then withdraw of the minted units
//!    returns no more than was put in.
//! 5. **LP conservation**: after any sequence of calls the LP book sums to
//!    its total, and a full exit is possible.

use proptest::prelude::*;

use crate::config::DexConfig;
use crate::domain::{Address, Amount, Liquidity};
use crate::exchange::Exchange;
use crate::ledger::MemoryToken;
use crate::math::price;
use primitive_types::U256;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ACCOUNT_FUNDS: u128 = 1_000_000_000_000_000_000;

fn pool() -> Address {
    Address::repeat_byte(0xd0)
}

fn actors() -> [Address; 3] {
    [
        Address::repeat_byte(0xa1),
        Address::repeat_byte(0xb2),
        Address::repeat_byte(0xc3),
    ]
}

/// Exchange with every actor funded and approved, bootstrapped by the
/// first actor.
fn make_exchange(eth: u128, tokens: u128) -> Exchange<MemoryToken> {
    let Ok(cfg) = DexConfig::new(pool(), Address::repeat_byte(0x70)) else {
        panic!("valid config");
    };
    let mut token = MemoryToken::new(cfg.token_address());
    for who in actors() {
        let Ok(()) = token.mint(&who, Amount::new(ACCOUNT_FUNDS)) else {
            panic!("mint");
        };
        token.approve(&who, &pool(), Amount::new(ACCOUNT_FUNDS));
    }
    let Ok(ex) = Exchange::new(&cfg, token) else {
        panic!("valid exchange");
    };
    for who in actors() {
        let Ok(()) = ex.fund(&who, Amount::new(ACCOUNT_FUNDS)) else {
            panic!("fund");
        };
    }
    let Ok(_) = ex.init(&actors()[0], Amount::new(eth), Amount::new(tokens)) else {
        panic!("init");
    };
    ex
}

fn fee_less_output(input: u128, input_reserve: u128, output_reserve: u128) -> U256 {
    let n = U256::from(input) * U256::from(output_reserve);
    n / (U256::from(input_reserve) + U256::from(input))
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [1_000, 1_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000u128
}

/// Trade sizes in [1, 100_000_000].
fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=100_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Buy { who: usize, value: u128 },
    Sell { who: usize, tokens: u128 },
    Deposit { who: usize, value: u128 },
    Withdraw { who: usize, fraction: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, input_strategy()).prop_map(|(who, value)| Op::Buy { who, value }),
        (0usize..3, input_strategy()).prop_map(|(who, tokens)| Op::Sell { who, tokens }),
        (0usize..3, input_strategy()).prop_map(|(who, value)| Op::Deposit { who, value }),
        (0usize..3, 0u8..=100).prop_map(|(who, fraction)| Op::Withdraw { who, fraction }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Price monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_price_monotonic_in_input(
        a in input_strategy(),
        b in input_strategy(),
        ri in reserve_strategy(),
        ro in reserve_strategy(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let Ok(out_small) = price(Amount::new(small), Amount::new(ri), Amount::new(ro)) else {
            panic!("price");
        };
        let Ok(out_large) = price(Amount::new(large), Amount::new(ri), Amount::new(ro)) else {
            panic!("price");
        };
        prop_assert!(out_small <= out_large, "{} > {}", out_small, out_large);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Fee bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fee_never_pays_more_than_fee_less(
        x in input_strategy(),
        ri in reserve_strategy(),
        ro in reserve_strategy(),
    ) {
        let Ok(out) = price(Amount::new(x), Amount::new(ri), Amount::new(ro)) else {
            panic!("price");
        };
        prop_assert!(out.get() <= fee_less_output(x, ri, ro));
        prop_assert!(out < Amount::new(ro));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swaps_never_shrink_product(
        eth in reserve_strategy(),
        tokens in reserve_strategy(),
        value in input_strategy(),
        sell_tokens in any::<bool>(),
    ) {
        let ex = make_exchange(eth, tokens);
        let trader = actors()[1];
        let before = ex.reserves().product();

        let result = if sell_tokens {
            ex.token_to_eth(&trader, Amount::new(value))
        } else {
            ex.eth_to_token(&trader, Amount::new(value))
        };
        prop_assert!(result.is_ok(), "swap failed: {:?}", result);

        let after = ex.reserves().product();
        prop_assert!(after >= before, "product shrank");
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        eth in reserve_strategy(),
        tokens in reserve_strategy(),
        value in input_strategy(),
    ) {
        let ex = make_exchange(eth, tokens);
        let lp = actors()[2];

        let Ok(pulled) = ex.deposit(&lp, Amount::new(value)) else {
            panic!("deposit");
        };
        let minted = ex.liquidity_of(&lp);
        if minted.is_zero() {
            return Ok(());
        }
        let Ok((eth_back, tokens_back)) = ex.withdraw(&lp, minted) else {
            panic!("withdraw");
        };
        prop_assert!(eth_back <= Amount::new(value));
        prop_assert!(tokens_back <= pulled);
        prop_assert!(ex.liquidity_of(&lp).is_zero());
    }
}

// ---------------------------------------------------------------------------
// Property 5: LP conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_lp_book_conserved_over_sequences(
        eth in reserve_strategy(),
        tokens in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let ex = make_exchange(eth, tokens);
        let people = actors();

        for op in ops {
            // Individual calls may fail; a failure must leave no trace.
            let before = ex.pool();
            let outcome = match op {
                Op::Buy { who, value } => ex.eth_to_token(&people[who], Amount::new(value)).map(drop),
                Op::Sell { who, tokens } => ex.token_to_eth(&people[who], Amount::new(tokens)).map(drop),
                Op::Deposit { who, value } => ex.deposit(&people[who], Amount::new(value)).map(drop),
                Op::Withdraw { who, fraction } => {
                    let held = ex.liquidity_of(&people[who]).get();
                    let units = held * U256::from(fraction) / U256::from(100u8);
                    ex.withdraw(&people[who], Liquidity::from_amount(Amount::from_raw(units))).map(drop)
                }
            };
            if outcome.is_err() {
                prop_assert_eq!(ex.pool(), before);
            }
            prop_assert!(ex.pool().book().is_consistent());
        }

        // Every holder can leave; afterwards nothing is outstanding.
        for who in people {
            let held = ex.liquidity_of(&who);
            if !held.is_zero() {
                let result = ex.withdraw(&who, held);
                prop_assert!(result.is_ok(), "exit failed: {:?}", result);
            }
        }
        prop_assert!(ex.total_liquidity().is_zero());
    }
}
