//! Prediction market definitions
//!
//! A market declares an outcome list, a trading deadline, and the reputation
//! group used to weight settlement votes.

use crate::ids::{AccountId, MarketId};
use serde::{Deserialize, Serialize};

/// Market lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    /// Accepting orders
    Open,
    /// Outcome finalized by the settlement engine
    Settled,
}

/// A prediction market definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMarket {
    pub id: MarketId,
    pub question: String,
    /// Declared outcome labels. Order is significant: consensus tie-breaks
    /// resolve to the earliest-declared label.
    pub outcomes: Vec<String>,
    /// Reputation group weighting settlement votes for this market
    pub group_id: String,
    /// Unix seconds after which trading closes and settlement opens
    pub deadline: i64,
    pub status: MarketStatus,
    pub creator: AccountId,
    pub created_at: i64,
}

impl PredictionMarket {
    /// Find the declared outcome label matching `vote`, ignoring ASCII case.
    pub fn canonical_outcome(&self, vote: &str) -> Option<&str> {
        self.outcomes
            .iter()
            .map(String::as_str)
            .find(|label| label.eq_ignore_ascii_case(vote))
    }

    /// Whether `vote` names one of this market's declared outcomes.
    pub fn is_valid_outcome(&self, vote: &str) -> bool {
        self.canonical_outcome(vote).is_some()
    }

    /// Whether the trading deadline has elapsed and settlement may begin.
    ///
    /// A non-positive deadline means the market carries no deadline and is
    /// always ready (genesis-imported markets only; creation validates
    /// deadlines as strictly future).
    pub fn ready_for_settlement(&self, now: i64) -> bool {
        self.deadline <= 0 || now >= self.deadline
    }
}
