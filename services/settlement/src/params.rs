//! Settlement parameters

use serde::{Deserialize, Serialize};

/// Tunable settlement-phase parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Minimum accepted reveal nonce length, in bytes
    pub min_nonce_len: usize,
    /// Maximum accepted reveal nonce length, in bytes
    pub max_nonce_len: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            min_nonce_len: 8,
            max_nonce_len: 64,
        }
    }
}
