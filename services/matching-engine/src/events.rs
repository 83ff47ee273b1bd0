//! Engine events
//!
//! Events are immutable records buffered by the engine and drained by the
//! surrounding application for emission.

use serde::{Deserialize, Serialize};
use types::ids::{AccountId, MarketId, OrderId, TradeId};
use types::numeric::{Price, Quantity};
use types::order::Side;

/// A market was created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCreated {
    pub market_id: MarketId,
    pub creator: AccountId,
    pub question: String,
}

/// An order was posted (before any matching)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPosted {
    pub order_id: OrderId,
    pub market_id: MarketId,
    pub outcome_index: u32,
    pub creator: AccountId,
    pub side: Side,
}

/// An order was cancelled by its creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancelled {
    pub order_id: OrderId,
    pub creator: AccountId,
}

/// A trade was executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeExecuted {
    pub trade_id: TradeId,
    pub market_id: MarketId,
    pub outcome_index: u32,
    pub buyer: AccountId,
    pub seller: AccountId,
    pub price: Price,
    pub amount: Quantity,
}

/// Enum wrapper for all engine events, enabling uniform handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredictionEvent {
    MarketCreated(MarketCreated),
    OrderPosted(OrderPosted),
    OrderCancelled(OrderCancelled),
    TradeExecuted(TradeExecuted),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = PredictionEvent::OrderCancelled(OrderCancelled {
            order_id: OrderId::new(5),
            creator: AccountId::new("cosmos1alice"),
        });
        let json = serde_json::to_string(&event).unwrap();
        let back: PredictionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
