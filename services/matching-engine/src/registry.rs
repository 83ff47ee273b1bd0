//! Market registry
//!
//! Owns market definitions: outcome lists, trading deadlines, and the
//! reputation group consulted at settlement.

use std::collections::{BTreeMap, BTreeSet};

use types::ids::{AccountId, MarketId, Sequence};
use types::market::{MarketStatus, PredictionMarket};
use types::traits::MarketLookup;

use crate::errors::PredictionError;

/// Registry of all prediction markets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketRegistry {
    pub(crate) markets: BTreeMap<MarketId, PredictionMarket>,
    pub(crate) market_seq: Sequence,
}

impl MarketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new market with a fresh sequential id
    ///
    /// Validates: at least two outcome labels, all labels non-empty and
    /// unique (ignoring case, since votes are matched case-insensitively),
    /// non-empty question, deadline strictly in the future.
    pub fn create_market(
        &mut self,
        creator: AccountId,
        question: impl Into<String>,
        outcomes: Vec<String>,
        group_id: impl Into<String>,
        deadline: i64,
        now: i64,
    ) -> Result<MarketId, PredictionError> {
        let question = question.into();
        if outcomes.len() < 2 {
            return Err(PredictionError::InvalidRequest {
                reason: "at least two outcomes required".to_string(),
            });
        }
        if question.is_empty() {
            return Err(PredictionError::InvalidRequest {
                reason: "question cannot be empty".to_string(),
            });
        }
        if deadline <= now {
            return Err(PredictionError::InvalidRequest {
                reason: "deadline must be in the future".to_string(),
            });
        }
        let mut seen = BTreeSet::new();
        for outcome in &outcomes {
            if outcome.is_empty() {
                return Err(PredictionError::InvalidRequest {
                    reason: "outcome cannot be empty".to_string(),
                });
            }
            if !seen.insert(outcome.to_ascii_lowercase()) {
                return Err(PredictionError::InvalidRequest {
                    reason: "duplicate outcome".to_string(),
                });
            }
        }

        let id = MarketId::new(self.market_seq.next());
        let market = PredictionMarket {
            id,
            question,
            outcomes,
            group_id: group_id.into(),
            deadline,
            status: MarketStatus::Open,
            creator,
            created_at: now,
        };
        self.markets.insert(id, market);
        Ok(id)
    }

    /// Fetch a market by id
    pub fn get(&self, market_id: MarketId) -> Option<&PredictionMarket> {
        self.markets.get(&market_id)
    }

    /// All markets in id order
    pub fn iter(&self) -> impl Iterator<Item = &PredictionMarket> {
        self.markets.values()
    }
}

impl MarketLookup for MarketRegistry {
    fn market(&self, market_id: MarketId) -> Option<PredictionMarket> {
        self.markets.get(&market_id).cloned()
    }
}
