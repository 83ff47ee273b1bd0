//! Settlement events

use serde::{Deserialize, Serialize};
use types::ids::{AccountId, MarketId};

/// A voter committed to a hidden vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCommitted {
    pub market_id: MarketId,
    pub voter: AccountId,
}

/// A voter disclosed their vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRevealed {
    pub market_id: MarketId,
    pub voter: AccountId,
    pub vote: String,
}

/// A market's outcome was finalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeFinalized {
    pub market_id: MarketId,
    pub outcome: String,
    pub total_votes: u32,
}

/// Enum wrapper for all settlement events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementEvent {
    VoteCommitted(VoteCommitted),
    VoteRevealed(VoteRevealed),
    OutcomeFinalized(OutcomeFinalized),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = SettlementEvent::OutcomeFinalized(OutcomeFinalized {
            market_id: MarketId::new(1),
            outcome: "YES".to_string(),
            total_votes: 5,
        });
        let json = serde_json::to_string(&event).unwrap();
        let back: SettlementEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
