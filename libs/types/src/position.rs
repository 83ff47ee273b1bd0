//! Position tracking types
//!
//! Positions accumulate additively per `(market, owner, outcome)` and are
//! never deleted.

use crate::ids::{AccountId, MarketId};
use crate::numeric::Quantity;
use serde::{Deserialize, Serialize};

/// Composite storage key for a position
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionKey {
    pub market_id: MarketId,
    pub owner: AccountId,
    pub outcome_index: u32,
}

/// Accumulated holding in one outcome slot of a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub market_id: MarketId,
    pub owner: AccountId,
    pub outcome_index: u32,
    pub amount: Quantity,
    pub is_buy: bool,
}

impl Position {
    pub fn new(
        market_id: MarketId,
        owner: AccountId,
        outcome_index: u32,
        amount: Quantity,
        is_buy: bool,
    ) -> Self {
        Self {
            market_id,
            owner,
            outcome_index,
            amount,
            is_buy,
        }
    }

    /// Storage key for this position
    pub fn key(&self) -> PositionKey {
        PositionKey {
            market_id: self.market_id,
            owner: self.owner.clone(),
            outcome_index: self.outcome_index,
        }
    }

    /// Accumulate a contribution
    pub fn add(&mut self, amount: Quantity) {
        self.amount = self.amount + amount;
    }
}
