//! Crossing and priority rules
//!
//! Pure matching predicates: when a taker crosses a resting order, how
//! candidates are ranked, and which account takes which trade leg.

use types::ids::AccountId;
use types::numeric::Price;
use types::order::{Order, Side};

/// Check if a taker at `taker_price` crosses a resting order at `resting_price`
///
/// A resting sell crosses a buy taker iff its ask does not exceed the bid;
/// a resting buy crosses a sell taker iff its bid is at least the ask.
pub fn crosses(taker_side: Side, taker_price: Price, resting_price: Price) -> bool {
    match taker_side {
        Side::Buy => resting_price <= taker_price,
        Side::Sell => resting_price >= taker_price,
    }
}

/// Sort crossing candidates by price-time priority
///
/// Best price first (lowest ask for a buy taker, highest bid for a sell
/// taker), then earliest creation time, then lowest order id.
pub fn sort_candidates(taker_side: Side, candidates: &mut [Order]) {
    candidates.sort_by(|a, b| {
        let by_price = match taker_side {
            Side::Buy => a.price.cmp(&b.price),
            Side::Sell => b.price.cmp(&a.price),
        };
        by_price
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Resolve the buyer and seller accounts for a taker/maker match
pub fn resolve_parties<'a>(taker: &'a Order, maker: &'a Order) -> (&'a AccountId, &'a AccountId) {
    match taker.side {
        Side::Buy => (&taker.creator, &maker.creator),
        Side::Sell => (&maker.creator, &taker.creator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use types::ids::{MarketId, OrderId};
    use types::numeric::Quantity;

    fn order(id: u64, side: Side, price: &str, created_at: i64) -> Order {
        Order::new(
            OrderId::new(id),
            MarketId::new(1),
            0,
            AccountId::new(format!("cosmos1acct{id}")),
            side,
            Price::from_str(price).unwrap(),
            Quantity::from_u64(10),
            created_at,
        )
    }

    #[test]
    fn test_buy_crosses_lower_or_equal_ask() {
        let bid = Price::from_str("0.60").unwrap();
        assert!(crosses(Side::Buy, bid, Price::from_str("0.55").unwrap()));
        assert!(crosses(Side::Buy, bid, bid));
        assert!(!crosses(Side::Buy, bid, Price::from_str("0.65").unwrap()));
    }

    #[test]
    fn test_sell_crosses_higher_or_equal_bid() {
        let ask = Price::from_str("0.40").unwrap();
        assert!(crosses(Side::Sell, ask, Price::from_str("0.45").unwrap()));
        assert!(crosses(Side::Sell, ask, ask));
        assert!(!crosses(Side::Sell, ask, Price::from_str("0.35").unwrap()));
    }

    #[test]
    fn test_buy_taker_sorts_asks_ascending() {
        let mut candidates = vec![
            order(1, Side::Sell, "100", 2),
            order(2, Side::Sell, "99", 3),
        ];
        sort_candidates(Side::Buy, &mut candidates);
        assert_eq!(candidates[0].id, OrderId::new(2));
        assert_eq!(candidates[1].id, OrderId::new(1));
    }

    #[test]
    fn test_sell_taker_sorts_bids_descending() {
        let mut candidates = vec![
            order(1, Side::Buy, "99", 2),
            order(2, Side::Buy, "100", 3),
        ];
        sort_candidates(Side::Sell, &mut candidates);
        assert_eq!(candidates[0].id, OrderId::new(2));
    }

    #[test]
    fn test_equal_price_fifo() {
        let mut candidates = vec![
            order(5, Side::Sell, "99", 20),
            order(3, Side::Sell, "99", 10),
        ];
        sort_candidates(Side::Buy, &mut candidates);
        assert_eq!(candidates[0].id, OrderId::new(3));
    }

    #[test]
    fn test_equal_price_and_time_breaks_by_id() {
        let mut candidates = vec![
            order(9, Side::Sell, "99", 10),
            order(4, Side::Sell, "99", 10),
        ];
        sort_candidates(Side::Buy, &mut candidates);
        assert_eq!(candidates[0].id, OrderId::new(4));
    }

    #[test]
    fn test_resolve_parties() {
        let taker = order(1, Side::Buy, "0.5", 1);
        let maker = order(2, Side::Sell, "0.5", 0);
        let (buyer, seller) = resolve_parties(&taker, &maker);
        assert_eq!(buyer, &taker.creator);
        assert_eq!(seller, &maker.creator);

        let (buyer, seller) = resolve_parties(&maker, &taker);
        assert_eq!(buyer, &taker.creator);
        assert_eq!(seller, &maker.creator);
    }
}
