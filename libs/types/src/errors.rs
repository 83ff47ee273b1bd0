//! Shared error taxonomy
//!
//! Errors used across module boundaries. Each engine crate defines its own
//! operation-level error enum and wraps these where needed.

use thiserror::Error;

/// Numeric parse/validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Errors surfaced by reputation ledger implementations
///
/// The in-memory ledger is infallible; store-backed implementations report
/// write failures through this type so callers can decide whether the
/// failure is fatal for the enclosing transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReputationError {
    #[error("Reputation store write failed: {reason}")]
    StoreWriteFailed { reason: String },
}
