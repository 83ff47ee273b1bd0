//! Matching Engine
//!
//! Order book and matching for prediction markets. Each `(market, outcome)`
//! pair is a fully isolated book; incoming orders match against resting
//! opposite-side orders under strict price-time priority, with the execution
//! price always taken from the resting order.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (ties broken by creation order)
//! - Deterministic matching (same operation stream → same trades)
//! - Conservation: total traded quantity never exceeds the taker's amount
//! - Orders are never deleted, only moved to terminal states

pub mod engine;
pub mod errors;
pub mod events;
pub mod genesis;
pub mod matching;
pub mod registry;

pub use engine::{MatchingEngine, OrderBookSnapshot};
pub use registry::MarketRegistry;
