//! Commit-reveal settlement state machine
//!
//! Per-market phases: Committing → Revealing → Finalized. Per-voter
//! transitions are one-way (NoCommit → Committed → Revealed); no retraction
//! or re-commitment is possible, which prevents vote-changing after seeing
//! others' reveals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use types::ids::{AccountId, MarketId};
use types::market::PredictionMarket;
use types::traits::{MarketLookup, ReputationAccess};

use crate::commitment;
use crate::errors::SettlementError;
use crate::events::{OutcomeFinalized, SettlementEvent, VoteCommitted, VoteRevealed};
use crate::params::Params;

/// A voter's hiding commitment for a market outcome vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCommit {
    pub market_id: MarketId,
    pub voter: AccountId,
    /// Hex-encoded SHA-256 digest of the vote concatenated with the nonce
    pub commitment: String,
}

/// A disclosed vote with the nonce that opens its commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReveal {
    pub market_id: MarketId,
    pub voter: AccountId,
    pub vote: String,
    pub nonce: String,
}

/// Aggregate settlement progress for a market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementStats {
    pub market_id: MarketId,
    pub total_commits: u32,
    pub total_reveals: u32,
    /// Reveals per commit, zero when nothing is committed
    pub reveal_rate: Decimal,
    pub unique_voters: u32,
}

/// Commit-reveal settlement engine for all markets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementEngine {
    pub(crate) commits: BTreeMap<(MarketId, AccountId), VoteCommit>,
    pub(crate) reveals: BTreeMap<(MarketId, AccountId), VoteReveal>,
    pub(crate) outcomes: BTreeMap<MarketId, String>,
    params: Params,
    events: Vec<SettlementEvent>,
}

impl SettlementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: Params) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Store a voter's hiding commitment
    ///
    /// The commit phase opens only once the market's trading deadline has
    /// elapsed; one commit per voter per market, no overwrite.
    pub fn commit_vote(
        &mut self,
        markets: &impl MarketLookup,
        market_id: MarketId,
        voter: AccountId,
        commitment: impl Into<String>,
        block_time: i64,
    ) -> Result<(), SettlementError> {
        let market = markets
            .market(market_id)
            .ok_or(SettlementError::MarketNotFound { market_id })?;
        if !market.ready_for_settlement(block_time) {
            return Err(SettlementError::MarketNotReady { market_id });
        }
        let key = (market_id, voter.clone());
        if self.commits.contains_key(&key) {
            return Err(SettlementError::AlreadyCommitted { market_id });
        }
        let commitment = commitment.into();
        if !commitment::is_well_formed(&commitment) {
            return Err(SettlementError::InvalidCommitment);
        }

        self.commits.insert(
            key,
            VoteCommit {
                market_id,
                voter: voter.clone(),
                commitment,
            },
        );
        self.events
            .push(SettlementEvent::VoteCommitted(VoteCommitted {
                market_id,
                voter,
            }));
        Ok(())
    }

    /// Disclose a vote, validating it against the stored commitment
    pub fn reveal_vote(
        &mut self,
        markets: &impl MarketLookup,
        market_id: MarketId,
        voter: AccountId,
        vote: impl Into<String>,
        nonce: impl Into<String>,
    ) -> Result<(), SettlementError> {
        let vote = vote.into();
        let nonce = nonce.into();
        let key = (market_id, voter.clone());

        let commit = self
            .commits
            .get(&key)
            .ok_or(SettlementError::NoCommitmentFound)?;
        if commit.commitment != commitment::commitment_digest(&vote, &nonce) {
            return Err(SettlementError::CommitmentMismatch);
        }
        if self.reveals.contains_key(&key) {
            return Err(SettlementError::AlreadyRevealed { market_id });
        }
        let market = markets
            .market(market_id)
            .ok_or(SettlementError::MarketNotFound { market_id })?;
        if !market.is_valid_outcome(&vote) {
            return Err(SettlementError::InvalidVote { vote });
        }
        let len = nonce.len();
        if len < self.params.min_nonce_len || len > self.params.max_nonce_len {
            return Err(SettlementError::InvalidNonce {
                len,
                min: self.params.min_nonce_len,
                max: self.params.max_nonce_len,
            });
        }

        self.reveals.insert(
            key,
            VoteReveal {
                market_id,
                voter: voter.clone(),
                vote: vote.clone(),
                nonce,
            },
        );
        self.events
            .push(SettlementEvent::VoteRevealed(VoteRevealed {
                market_id,
                voter,
                vote,
            }));
        Ok(())
    }

    /// Finalize a market's outcome from the revealed votes
    ///
    /// Each reveal is weighted by the voter's reputation score in the
    /// market's group (floored at 1, and 1 when no entry exists, so no voter
    /// is ever weightless). Weights are summed per canonical outcome label
    /// and the winner is selected by scanning the market's declared outcome
    /// order with a strict comparison: ties resolve to the
    /// earliest-declared label. After the outcome is stored, every revealed
    /// voter is adjusted +1 or -1; adjustment failures are logged and
    /// skipped, never rolling back the stored outcome.
    pub fn finalize_outcome(
        &mut self,
        markets: &impl MarketLookup,
        reputation: &mut impl ReputationAccess,
        market_id: MarketId,
    ) -> Result<String, SettlementError> {
        if self.outcomes.contains_key(&market_id) {
            return Err(SettlementError::OutcomeAlreadyFinalized { market_id });
        }
        let market = markets
            .market(market_id)
            .ok_or(SettlementError::MarketNotFound { market_id })?;

        let reveals: Vec<VoteReveal> = self.market_reveals(market_id).cloned().collect();
        if reveals.is_empty() {
            return Err(SettlementError::NoRevealsFound { market_id });
        }

        let weights = Self::tally(&market, &*reputation, &reveals);
        let mut consensus: Option<&str> = None;
        let mut max_weight = 0i64;
        for label in &market.outcomes {
            let weight = weights.get(label.as_str()).copied().unwrap_or(0);
            if weight > max_weight {
                max_weight = weight;
                consensus = Some(label.as_str());
            }
        }
        let consensus = consensus
            .ok_or(SettlementError::NoRevealsFound { market_id })?
            .to_string();

        self.outcomes.insert(market_id, consensus.clone());

        for reveal in &reveals {
            let correct = market
                .canonical_outcome(&reveal.vote)
                .map(|label| label == consensus)
                .unwrap_or(false);
            let delta = if correct { 1 } else { -1 };
            if let Err(err) = reputation.adjust(&reveal.voter, &market.group_id, delta) {
                error!(voter = %reveal.voter, %err, "failed to adjust reputation score");
            }
        }

        self.events
            .push(SettlementEvent::OutcomeFinalized(OutcomeFinalized {
                market_id,
                outcome: consensus.clone(),
                total_votes: reveals.len() as u32,
            }));
        Ok(consensus)
    }

    /// Sum reputation weights per canonical outcome label
    fn tally(
        market: &PredictionMarket,
        reputation: &impl ReputationAccess,
        reveals: &[VoteReveal],
    ) -> BTreeMap<String, i64> {
        let mut weights = BTreeMap::new();
        for reveal in reveals {
            let Some(label) = market.canonical_outcome(&reveal.vote) else {
                continue;
            };
            let (score, found) = reputation.score(&reveal.voter, &market.group_id);
            let weight = if found { score.max(1) } else { 1 };
            *weights.entry(label.to_string()).or_insert(0) += weight;
        }
        weights
    }

    // ---- read queries -------------------------------------------------

    /// Fetch a voter's commitment
    pub fn commit(&self, market_id: MarketId, voter: &AccountId) -> Option<&VoteCommit> {
        self.commits.get(&(market_id, voter.clone()))
    }

    /// Fetch a voter's reveal
    pub fn reveal(&self, market_id: MarketId, voter: &AccountId) -> Option<&VoteReveal> {
        self.reveals.get(&(market_id, voter.clone()))
    }

    /// Finalized outcome label, if any
    pub fn outcome(&self, market_id: MarketId) -> Option<&str> {
        self.outcomes.get(&market_id).map(String::as_str)
    }

    /// All commitments for a market, in voter order
    pub fn market_commits(&self, market_id: MarketId) -> impl Iterator<Item = &VoteCommit> {
        self.commits
            .values()
            .filter(move |c| c.market_id == market_id)
    }

    /// All reveals for a market, in voter order
    pub fn market_reveals(&self, market_id: MarketId) -> impl Iterator<Item = &VoteReveal> {
        self.reveals
            .values()
            .filter(move |r| r.market_id == market_id)
    }

    /// Count of reveals per submitted vote label
    pub fn vote_distribution(&self, market_id: MarketId) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for reveal in self.market_reveals(market_id) {
            *counts.entry(reveal.vote.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Reputation-weighted vote distribution per canonical outcome label
    pub fn weighted_votes(
        &self,
        markets: &impl MarketLookup,
        reputation: &impl ReputationAccess,
        market_id: MarketId,
    ) -> Result<BTreeMap<String, i64>, SettlementError> {
        let market = markets
            .market(market_id)
            .ok_or(SettlementError::MarketNotFound { market_id })?;
        let reveals: Vec<VoteReveal> = self.market_reveals(market_id).cloned().collect();
        Ok(Self::tally(&market, reputation, &reveals))
    }

    /// Aggregate settlement progress for a market
    pub fn stats(&self, market_id: MarketId) -> SettlementStats {
        let total_commits = self.market_commits(market_id).count() as u32;
        let total_reveals = self.market_reveals(market_id).count() as u32;
        let unique_voters = total_commits;
        let reveal_rate = if total_commits == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(total_reveals)
                .checked_div(Decimal::from(total_commits))
                .unwrap_or(Decimal::ZERO)
        };
        SettlementStats {
            market_id,
            total_commits,
            total_reveals,
            reveal_rate,
            unique_voters,
        }
    }

    /// Buffered events
    pub fn events(&self) -> &[SettlementEvent] {
        &self.events
    }

    /// Drain buffered events
    pub fn drain_events(&mut self) -> Vec<SettlementEvent> {
        std::mem::take(&mut self.events)
    }
}
