//! Collaborator interfaces between ledger modules
//!
//! The settlement engine consumes the market registry and the reputation
//! ledger exclusively through these seams, so each module can be exercised
//! in isolation against mocks.

use crate::errors::ReputationError;
use crate::ids::{AccountId, MarketId};
use crate::market::PredictionMarket;

/// Read access to the market registry
pub trait MarketLookup {
    /// Fetch a market definition by id
    fn market(&self, market_id: MarketId) -> Option<PredictionMarket>;
}

/// Read/write access to reputation scores
///
/// Scores are non-negative integers keyed by `(account, group)`; groups are
/// fully isolated namespaces.
pub trait ReputationAccess {
    /// Current score for `(account, group)`. Returns the value and whether
    /// an entry exists; absent entries read as zero.
    fn score(&self, account: &AccountId, group_id: &str) -> (i64, bool);

    /// Add `delta` to the score, clamping the result at zero, and store the
    /// result unconditionally (a zero delta materializes an entry). Returns
    /// the stored score.
    fn adjust(
        &mut self,
        account: &AccountId,
        group_id: &str,
        delta: i64,
    ) -> Result<i64, ReputationError>;
}
