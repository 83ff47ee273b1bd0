//! Order lifecycle types

use crate::ids::{AccountId, MarketId, OrderId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order status
///
/// `Cancelled` is terminal and reachable only from `Open`/`PartiallyFilled`
/// by explicit cancellation; the other states are a function of the filled
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Resting with no fills
    Open,
    /// Some fills, remainder still live
    PartiallyFilled,
    /// Completely filled (terminal)
    Filled,
    /// Cancelled by the creator (terminal)
    Cancelled,
}

impl OrderStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Cancelled)
    }

    /// Check if an order in this status can accept fills
    pub fn is_fillable(&self) -> bool {
        matches!(self, OrderStatus::Open | OrderStatus::PartiallyFilled)
    }
}

/// A limit order on one outcome slot of a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub market_id: MarketId,
    pub outcome_index: u32,
    pub creator: AccountId,
    pub side: Side,
    pub price: Price,
    pub amount: Quantity,
    pub filled_amount: Quantity,
    pub status: OrderStatus,
    /// Logical block time at creation; ties broken by ascending order id
    pub created_at: i64,
}

impl Order {
    /// Create a new open order with zero fill
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OrderId,
        market_id: MarketId,
        outcome_index: u32,
        creator: AccountId,
        side: Side,
        price: Price,
        amount: Quantity,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            market_id,
            outcome_index,
            creator,
            side,
            price,
            amount,
            filled_amount: Quantity::zero(),
            status: OrderStatus::Open,
            created_at,
        }
    }

    /// Unfilled remainder
    pub fn remaining(&self) -> Quantity {
        self.amount.saturating_sub(self.filled_amount)
    }

    /// Check if order is completely filled
    pub fn is_filled(&self) -> bool {
        self.filled_amount == self.amount
    }

    /// Apply a fill and adjust status
    ///
    /// # Panics
    /// Panics if the fill would exceed the order amount. Callers validate
    /// fill sizes before applying them.
    pub fn add_fill(&mut self, fill: Quantity) {
        let new_filled = self.filled_amount + fill;
        assert!(new_filled <= self.amount, "fill would exceed order amount");
        self.filled_amount = new_filled;
        if self.is_filled() {
            self.status = OrderStatus::Filled;
        } else if !self.filled_amount.is_zero() {
            self.status = OrderStatus::PartiallyFilled;
        }
    }

    /// Cancel the order
    ///
    /// # Panics
    /// Panics if the order is already terminal. Callers reject terminal
    /// orders with a conflict error before reaching this.
    pub fn cancel(&mut self) {
        assert!(!self.status.is_terminal(), "cannot cancel terminal order");
        self.status = OrderStatus::Cancelled;
    }
}
