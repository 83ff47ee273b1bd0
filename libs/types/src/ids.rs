//! Identifier types for ledger entities
//!
//! Entity ids are sequential `u64` values drawn from a [`Sequence`], so that
//! every replica allocates identical ids for identical operation streams.
//! Account identifiers are opaque comparable strings; the ledger core never
//! interprets or verifies them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a prediction market
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(u64);

impl MarketId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MarketId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(u64);

impl TradeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TradeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque account identifier
///
/// A comparable address string. Signature verification happens upstream;
/// the ledger core only stores and compares these.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Monotonic id source
///
/// `next` returns the current value and advances. All entity ids come from a
/// `Sequence` so id allocation replays identically on every replica.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    next_value: u64,
}

impl Sequence {
    pub fn new() -> Self {
        Self { next_value: 0 }
    }

    /// Resume a sequence at a given value (genesis import).
    pub fn starting_at(value: u64) -> Self {
        Self { next_value: value }
    }

    /// Allocate the next id.
    pub fn next(&mut self) -> u64 {
        let value = self.next_value;
        self.next_value += 1;
        value
    }

    /// The value the next call to `next` will return.
    pub fn peek(&self) -> u64 {
        self.next_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_monotonic() {
        let mut seq = Sequence::new();
        assert_eq!(seq.next(), 0);
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn test_sequence_starting_at() {
        let mut seq = Sequence::starting_at(42);
        assert_eq!(seq.next(), 42);
        assert_eq!(seq.next(), 43);
    }

    #[test]
    fn test_market_id_ordering() {
        assert!(MarketId::new(1) < MarketId::new(2));
        assert_eq!(MarketId::new(7).value(), 7);
    }

    #[test]
    fn test_account_id_comparable() {
        let alice = AccountId::new("cosmos1alice");
        let bob = AccountId::new("cosmos1bob");
        assert_ne!(alice, bob);
        assert_eq!(alice.as_str(), "cosmos1alice");
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
