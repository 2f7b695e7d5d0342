//! Walks a pool through its whole life: bootstrap, trades, a second
//! provider, and both providers exiting.
//!
//! Run with `RUST_LOG=debug` to see every quote the pool computes.

#![allow(clippy::panic)]

use hydra_dex::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
pool_address  = "0xd0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0"
token_address = "0x7070707070707070707070707070707070707070"
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        panic!("walkthrough failed: {e}");
    }
}

fn run() -> Result<()> {
    let cfg = DexConfig::from_toml_str(CONFIG)?;
    let pool = cfg.pool_address();
    let alice = Address::repeat_byte(0xa1);
    let bob = Address::repeat_byte(0xb0);
    let carol = Address::repeat_byte(0xc0);

    let mut token = MemoryToken::new(cfg.token_address());
    for who in [alice, bob, carol] {
        token.mint(&who, Amount::new(1_000_000))?;
        token.approve(&who, &pool, Amount::new(1_000_000));
    }
    let ex = Exchange::new(&cfg, token)?;
    for who in [alice, bob, carol] {
        ex.fund(&who, Amount::new(1_000_000))?;
    }

    // 1. Alice opens the pool at 1 native : 4 tokens.
    let minted = ex.init(&alice, Amount::new(100_000), Amount::new(400_000))?;
    println!("alice minted {minted} LP units");
    print_state(&ex);

    // 2. Bob trades in both directions.
    let quote = ex.quote_eth_to_token(Amount::new(5_000))?;
    let bought = ex.eth_to_token(&bob, Amount::new(5_000))?;
    println!("bob sold 5000 native for {bought} tokens (quoted {quote})");
    let sold = ex.token_to_eth(&bob, Amount::new(10_000))?;
    println!("bob sold 10000 tokens for {sold} native");
    print_state(&ex);

    // 3. Carol joins at the current ratio.
    let pulled = ex.deposit(&carol, Amount::new(50_000))?;
    println!(
        "carol deposited 50000 native and {pulled} tokens for {} LP units",
        ex.liquidity_of(&carol)
    );

    // 4. A rejected call changes nothing.
    if let Err(e) = ex.withdraw(&bob, Liquidity::new(1)) {
        println!("bob cannot withdraw: {e}");
    }

    // 5. Both providers exit.
    for (name, who) in [("alice", alice), ("carol", carol)] {
        let held = ex.liquidity_of(&who);
        let (native, tokens) = ex.withdraw(&who, held)?;
        println!("{name} redeemed {held} LP units for {native} native and {tokens} tokens");
    }
    print_state(&ex);

    println!("events:");
    for event in ex.events() {
        println!("  {event}");
    }
    Ok(())
}

fn print_state(ex: &Exchange<MemoryToken>) {
    let reserves = ex.reserves();
    println!(
        "  reserves: {} native / {} tokens, {} LP units outstanding",
        reserves.native(),
        reserves.token(),
        ex.total_liquidity()
    );
}
