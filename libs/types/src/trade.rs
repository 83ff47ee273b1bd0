//! Trade record types
//!
//! A trade is an immutable record of one fill between a buyer and a seller.
//! The price is always the resting (maker) order's price.

use crate::ids::{AccountId, MarketId, TradeId};
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed fill between two accounts on one outcome slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub market_id: MarketId,
    pub outcome_index: u32,
    pub buyer: AccountId,
    pub seller: AccountId,
    /// Execution price: the maker's posted price
    pub price: Price,
    /// Fill quantity, strictly positive
    pub amount: Quantity,
    /// Logical block time of execution
    pub timestamp: i64,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trade_id: TradeId,
        market_id: MarketId,
        outcome_index: u32,
        buyer: AccountId,
        seller: AccountId,
        price: Price,
        amount: Quantity,
        timestamp: i64,
    ) -> Self {
        Self {
            trade_id,
            market_id,
            outcome_index,
            buyer,
            seller,
            price,
            amount,
            timestamp,
        }
    }

    /// Notional value (price × amount)
    pub fn value(&self) -> Decimal {
        self.price.as_decimal() * self.amount.as_decimal()
    }
}
