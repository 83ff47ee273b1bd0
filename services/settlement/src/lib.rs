//! Commit-Reveal Settlement Engine
//!
//! Resolves a market's true outcome through a two-phase vote: voters first
//! publish a hiding SHA-256 commitment to their vote, then disclose the vote
//! and nonce, and finalization tallies the reveals weighted by voter
//! reputation. Correct voters gain reputation, incorrect voters lose it.
//!
//! **Key Invariants:**
//! - One commit and one reveal per voter per market, write-once
//! - A reveal is accepted only if it opens the stored commitment exactly
//! - Finalization is write-once per market and fully deterministic,
//!   including its tie-break rule
//! - A failed reputation adjustment never rolls back a stored outcome

pub mod commitment;
pub mod engine;
pub mod errors;
pub mod events;
pub mod genesis;
pub mod params;

pub use engine::{SettlementEngine, SettlementStats, VoteCommit, VoteReveal};
pub use params::Params;
