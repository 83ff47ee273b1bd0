//! Group-scoped reputation scores
//!
//! Scores never go below zero: adjustments clamp at the floor instead of
//! failing. Absence of an entry reads as zero but is distinguished from a
//! stored zero, because settlement weighting treats the two differently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use types::errors::ReputationError;
use types::ids::AccountId;
use types::traits::ReputationAccess;

/// Storage key for a score entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScoreKey {
    pub account: AccountId,
    pub group_id: String,
}

/// A single reputation score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationScore {
    pub account: AccountId,
    pub group_id: String,
    pub score: i64,
}

/// Ledger of reputation scores across all groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReputationLedger {
    scores: BTreeMap<ScoreKey, i64>,
}

impl ReputationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score and whether an entry exists
    pub fn score(&self, account: &AccountId, group_id: &str) -> (i64, bool) {
        let key = ScoreKey {
            account: account.clone(),
            group_id: group_id.to_string(),
        };
        match self.scores.get(&key) {
            Some(score) => (*score, true),
            None => (0, false),
        }
    }

    /// Store a score directly, clamped at zero (genesis import path)
    pub fn set_score(&mut self, account: AccountId, group_id: impl Into<String>, score: i64) {
        let key = ScoreKey {
            account,
            group_id: group_id.into(),
        };
        self.scores.insert(key, score.max(0));
    }

    /// Add `delta` to the score, clamping at zero
    ///
    /// The result is stored unconditionally, so even a zero-delta adjustment
    /// materializes an entry. Returns the stored score.
    pub fn adjust(
        &mut self,
        account: &AccountId,
        group_id: &str,
        delta: i64,
    ) -> Result<i64, ReputationError> {
        let (current, _) = self.score(account, group_id);
        let updated = current.saturating_add(delta).max(0);
        self.set_score(account.clone(), group_id, updated);
        Ok(updated)
    }

    /// Export all score entries in key order
    pub fn export(&self) -> Vec<ReputationScore> {
        self.scores
            .iter()
            .map(|(key, score)| ReputationScore {
                account: key.account.clone(),
                group_id: key.group_id.clone(),
                score: *score,
            })
            .collect()
    }

    /// Rebuild a ledger from exported entries
    pub fn from_entries(entries: Vec<ReputationScore>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.set_score(entry.account, entry.group_id, entry.score);
        }
        ledger
    }
}

impl ReputationAccess for ReputationLedger {
    fn score(&self, account: &AccountId, group_id: &str) -> (i64, bool) {
        ReputationLedger::score(self, account, group_id)
    }

    fn adjust(
        &mut self,
        account: &AccountId,
        group_id: &str,
        delta: i64,
    ) -> Result<i64, ReputationError> {
        ReputationLedger::adjust(self, account, group_id, delta)
    }
}
