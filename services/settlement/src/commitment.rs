//! Vote commitment hashing
//!
//! A commitment is the hex-encoded SHA-256 digest of the vote label
//! concatenated with the reveal nonce. Commitments hide the vote until the
//! reveal phase; changing a single character of either input produces a
//! different digest.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest
pub const COMMITMENT_LEN: usize = 64;

/// Compute the commitment digest for a vote and nonce
pub fn commitment_digest(vote: &str, nonce: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(vote.as_bytes());
    hasher.update(nonce.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check that a submitted commitment is syntactically a digest:
/// exactly 64 hex characters
pub fn is_well_formed(commitment: &str) -> bool {
    commitment.len() == COMMITMENT_LEN && commitment.chars().all(|c| c.is_ascii_hexdigit())
}
