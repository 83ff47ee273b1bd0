//! Error types for the market registry and matching engine

use thiserror::Error;
use types::errors::NumericError;
use types::ids::{MarketId, OrderId};
use types::numeric::Quantity;
use types::order::OrderStatus;

/// Operation errors for markets, orders, and matching
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Market not found: {market_id}")]
    MarketNotFound { market_id: MarketId },

    #[error("Outcome index {outcome_index} out of range")]
    InvalidOutcome { outcome_index: u32 },

    #[error("Order amount must be positive")]
    InvalidAmount,

    #[error(transparent)]
    InvalidPrice(#[from] NumericError),

    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: OrderId },

    #[error("Only the order creator can cancel order {order_id}")]
    Unauthorized { order_id: OrderId },

    #[error("Order already in terminal state: {status:?}")]
    OrderNotCancellable { status: OrderStatus },

    #[error("Order cannot be filled in state {status:?}")]
    OrderNotFillable { status: OrderStatus },

    #[error("Fill amount {requested} exceeds remaining {remaining}")]
    FillExceedsRemaining {
        requested: Quantity,
        remaining: Quantity,
    },
}
