//! Error types for the settlement engine

use thiserror::Error;
use types::ids::MarketId;

/// Settlement operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("Invalid commitment format")]
    InvalidCommitment,

    #[error("Market not found: {market_id}")]
    MarketNotFound { market_id: MarketId },

    #[error("Market {market_id} not ready for settlement")]
    MarketNotReady { market_id: MarketId },

    #[error("Invalid vote for market outcomes: {vote}")]
    InvalidVote { vote: String },

    #[error("Commitment does not match reveal")]
    CommitmentMismatch,

    #[error("Voter already committed for market {market_id}")]
    AlreadyCommitted { market_id: MarketId },

    #[error("Voter already revealed for market {market_id}")]
    AlreadyRevealed { market_id: MarketId },

    #[error("No commitment found for this voter")]
    NoCommitmentFound,

    #[error("Outcome already finalized for market {market_id}")]
    OutcomeAlreadyFinalized { market_id: MarketId },

    #[error("No reveals found for market {market_id}")]
    NoRevealsFound { market_id: MarketId },

    #[error("Invalid nonce length: {len} (expected {min}..={max})")]
    InvalidNonce { len: usize, min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SettlementError::MarketNotReady {
            market_id: MarketId::new(4),
        };
        assert_eq!(err.to_string(), "Market 4 not ready for settlement");
    }

    #[test]
    fn test_nonce_error_display() {
        let err = SettlementError::InvalidNonce {
            len: 3,
            min: 8,
            max: 64,
        };
        assert!(err.to_string().contains("8..=64"));
    }
}
