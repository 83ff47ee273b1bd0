//! Genesis import/export for the matching engine state
//!
//! The engine's full state (markets, orders, trades, positions, and id
//! sequences) round-trips through a serializable `GenesisState`.

use serde::{Deserialize, Serialize};
use types::market::PredictionMarket;
use types::order::Order;
use types::position::Position;
use types::trade::Trade;

use crate::engine::MatchingEngine;

/// Serializable snapshot of the engine's state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisState {
    pub markets: Vec<PredictionMarket>,
    pub orders: Vec<Order>,
    pub trades: Vec<Trade>,
    pub positions: Vec<Position>,
    pub market_seq: u64,
    pub order_seq: u64,
    pub trade_seq: u64,
}

impl MatchingEngine {
    /// Rebuild an engine from exported genesis state
    pub fn from_genesis(genesis: GenesisState) -> Self {
        let mut engine = MatchingEngine::new();
        for market in genesis.markets {
            engine.registry.markets.insert(market.id, market);
        }
        for order in genesis.orders {
            engine.orders.insert(order.id, order);
        }
        for trade in genesis.trades {
            engine.trades.insert(trade.trade_id, trade);
        }
        for position in genesis.positions {
            engine.positions.insert(position.key(), position);
        }
        engine.registry.market_seq = types::ids::Sequence::starting_at(genesis.market_seq);
        engine.order_seq = types::ids::Sequence::starting_at(genesis.order_seq);
        engine.trade_seq = types::ids::Sequence::starting_at(genesis.trade_seq);
        engine
    }

    /// Export the engine's state
    pub fn export_genesis(&self) -> GenesisState {
        GenesisState {
            markets: self.registry.markets.values().cloned().collect(),
            orders: self.orders.values().cloned().collect(),
            trades: self.trades.values().cloned().collect(),
            positions: self.positions.values().cloned().collect(),
            market_seq: self.registry.market_seq.peek(),
            order_seq: self.order_seq.peek(),
            trade_seq: self.trade_seq.peek(),
        }
    }
}
