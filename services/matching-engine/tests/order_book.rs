//! Order book integration tests
//!
//! Exercises the engine through full post/match/cancel/fill sequences and
//! checks the matching invariants: price-time priority, conservation, and
//! book isolation.

use matching_engine::MatchingEngine;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use types::ids::{AccountId, MarketId};
use types::numeric::Quantity;
use types::order::{OrderStatus, Side};

fn setup() -> (MatchingEngine, MarketId) {
    let mut engine = MatchingEngine::new();
    let market_id = engine
        .create_market(
            AccountId::new("cosmos1creator"),
            "Integration market?",
            vec!["YES".to_string(), "NO".to_string()],
            "grp",
            10_000,
            100,
        )
        .unwrap();
    (engine, market_id)
}

#[test]
fn price_priority_then_time_priority() {
    let (mut engine, market_id) = setup();

    // sell@99 (earlier) and sell@100 resting
    let (cheap_id, _) = engine
        .post_order(
            AccountId::new("cosmos1s1"),
            market_id,
            0,
            Side::Sell,
            "99",
            Quantity::from_u64(50),
            200,
        )
        .unwrap();
    let (dear_id, _) = engine
        .post_order(
            AccountId::new("cosmos1s2"),
            market_id,
            0,
            Side::Sell,
            "100",
            Quantity::from_u64(100),
            201,
        )
        .unwrap();

    // incoming buy@101 qty=120 sweeps the cheap seller first
    let (buy_id, trades) = engine
        .post_order(
            AccountId::new("cosmos1buyer"),
            market_id,
            0,
            Side::Buy,
            "101",
            Quantity::from_u64(120),
            202,
        )
        .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].price, "99".parse().unwrap());
    assert_eq!(trades[0].amount, Quantity::from_u64(50));
    assert_eq!(trades[1].price, "100".parse().unwrap());
    assert_eq!(trades[1].amount, Quantity::from_u64(70));

    assert_eq!(engine.order(cheap_id).unwrap().status, OrderStatus::Filled);
    assert_eq!(
        engine.order(dear_id).unwrap().status,
        OrderStatus::PartiallyFilled
    );
    assert_eq!(engine.order(buy_id).unwrap().status, OrderStatus::Filled);
}

#[test]
fn equal_prices_fill_in_creation_order() {
    let (mut engine, market_id) = setup();

    let (first_id, _) = engine
        .post_order(
            AccountId::new("cosmos1early"),
            market_id,
            0,
            Side::Sell,
            "50",
            Quantity::from_u64(10),
            200,
        )
        .unwrap();
    let (second_id, _) = engine
        .post_order(
            AccountId::new("cosmos1late"),
            market_id,
            0,
            Side::Sell,
            "50",
            Quantity::from_u64(10),
            201,
        )
        .unwrap();

    let (_, trades) = engine
        .post_order(
            AccountId::new("cosmos1buyer"),
            market_id,
            0,
            Side::Buy,
            "50",
            Quantity::from_u64(10),
            202,
        )
        .unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].seller, AccountId::new("cosmos1early"));
    assert_eq!(engine.order(first_id).unwrap().status, OrderStatus::Filled);
    assert_eq!(engine.order(second_id).unwrap().status, OrderStatus::Open);
}

#[test]
fn markets_never_leak_trades() {
    let mut engine = MatchingEngine::new();
    let market_a = engine
        .create_market(
            AccountId::new("cosmos1creator"),
            "Market A?",
            vec!["YES".to_string(), "NO".to_string()],
            "grp",
            10_000,
            100,
        )
        .unwrap();
    let market_b = engine
        .create_market(
            AccountId::new("cosmos1creator"),
            "Market B?",
            vec!["YES".to_string(), "NO".to_string()],
            "grp",
            10_000,
            100,
        )
        .unwrap();

    engine
        .post_order(
            AccountId::new("cosmos1seller"),
            market_a,
            0,
            Side::Sell,
            "10",
            Quantity::from_u64(5),
            200,
        )
        .unwrap();
    let (_, trades) = engine
        .post_order(
            AccountId::new("cosmos1buyer"),
            market_b,
            0,
            Side::Buy,
            "10",
            Quantity::from_u64(5),
            201,
        )
        .unwrap();

    assert!(trades.is_empty());
    assert!(engine.market_trades(market_a).is_empty());
    assert!(engine.market_trades(market_b).is_empty());
}

#[test]
fn trades_never_pair_same_side() {
    let (mut engine, market_id) = setup();
    for i in 0..4u64 {
        engine
            .post_order(
                AccountId::new(format!("cosmos1s{i}")),
                market_id,
                0,
                Side::Sell,
                "10",
                Quantity::from_u64(5),
                200 + i as i64,
            )
            .unwrap();
    }
    let (_, trades) = engine
        .post_order(
            AccountId::new("cosmos1buyer"),
            market_id,
            0,
            Side::Buy,
            "10",
            Quantity::from_u64(20),
            300,
        )
        .unwrap();

    assert_eq!(trades.len(), 4);
    for trade in &trades {
        let seller = engine
            .user_orders(&trade.seller)
            .into_iter()
            .find(|o| o.market_id == trade.market_id)
            .unwrap();
        assert_eq!(seller.side, Side::Sell);
        assert_ne!(trade.buyer, trade.seller);
    }
}

#[test]
fn cancelled_remainder_stays_cancelled_after_matching_attempts() {
    let (mut engine, market_id) = setup();
    let seller = AccountId::new("cosmos1seller");
    let (sell_id, _) = engine
        .post_order(
            seller.clone(),
            market_id,
            0,
            Side::Sell,
            "10",
            Quantity::from_u64(10),
            200,
        )
        .unwrap();
    engine.cancel_order(sell_id, &seller).unwrap();

    let (_, trades) = engine
        .post_order(
            AccountId::new("cosmos1buyer"),
            market_id,
            0,
            Side::Buy,
            "10",
            Quantity::from_u64(10),
            201,
        )
        .unwrap();
    assert!(trades.is_empty());
    assert_eq!(
        engine.order(sell_id).unwrap().status,
        OrderStatus::Cancelled
    );
}

proptest! {
    /// Conservation: trades against one taker never exceed the taker's
    /// amount, and sum to it exactly when the taker ends Filled.
    #[test]
    fn conservation_of_taker_quantity(
        resting in prop::collection::vec((1u64..=50, 1u64..=9), 1..8),
        taker_amount in 1u64..=200,
        taker_price in 1u64..=9,
    ) {
        let (mut engine, market_id) = setup();
        for (i, (qty, price)) in resting.iter().enumerate() {
            engine
                .post_order(
                    AccountId::new(format!("cosmos1maker{i}")),
                    market_id,
                    0,
                    Side::Sell,
                    &price.to_string(),
                    Quantity::from_u64(*qty),
                    200 + i as i64,
                )
                .unwrap();
        }

        let (taker_id, trades) = engine
            .post_order(
                AccountId::new("cosmos1taker"),
                market_id,
                0,
                Side::Buy,
                &taker_price.to_string(),
                Quantity::from_u64(taker_amount),
                400,
            )
            .unwrap();

        let total: u64 = trades
            .iter()
            .map(|t| t.amount.as_decimal().to_u64().unwrap_or(0))
            .sum();
        prop_assert!(total <= taker_amount);

        let taker = engine.order(taker_id).unwrap();
        if taker.status == OrderStatus::Filled {
            prop_assert_eq!(total, taker_amount);
        } else {
            prop_assert!(total < taker_amount);
        }

        // Every trade executed at the maker's price, within the taker's limit
        for trade in &trades {
            prop_assert!(trade.price.as_decimal() <= rust_decimal::Decimal::from(taker_price));
        }
    }
}
