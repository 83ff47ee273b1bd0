//! Genesis import/export for the settlement state

use serde::{Deserialize, Serialize};
use types::ids::MarketId;

use crate::engine::{SettlementEngine, VoteCommit, VoteReveal};
use crate::params::Params;

/// A finalized market outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOutcome {
    pub market_id: MarketId,
    pub outcome: String,
}

/// Serializable snapshot of the settlement state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub params: Option<Params>,
    pub commits: Vec<VoteCommit>,
    pub reveals: Vec<VoteReveal>,
    pub outcomes: Vec<MarketOutcome>,
}

impl SettlementEngine {
    /// Rebuild an engine from exported genesis state
    ///
    /// Imported reveals are trusted as-is; commitment verification happened
    /// when they were first accepted.
    pub fn from_genesis(genesis: GenesisState) -> Self {
        let mut engine = match genesis.params {
            Some(params) => SettlementEngine::with_params(params),
            None => SettlementEngine::new(),
        };
        for commit in genesis.commits {
            engine
                .commits
                .insert((commit.market_id, commit.voter.clone()), commit);
        }
        for reveal in genesis.reveals {
            engine
                .reveals
                .insert((reveal.market_id, reveal.voter.clone()), reveal);
        }
        for outcome in genesis.outcomes {
            engine.outcomes.insert(outcome.market_id, outcome.outcome);
        }
        engine
    }

    /// Export the settlement state
    pub fn export_genesis(&self) -> GenesisState {
        GenesisState {
            params: Some(self.params().clone()),
            commits: self.commits.values().cloned().collect(),
            reveals: self.reveals.values().cloned().collect(),
            outcomes: self
                .outcomes
                .iter()
                .map(|(market_id, outcome)| MarketOutcome {
                    market_id: *market_id,
                    outcome: outcome.clone(),
                })
                .collect(),
        }
    }
}
