//! Errors for the fallible corners of the crate
//!
//! Drawing numbers never fails. Only restoring raw state and loading stream
//! configuration can be rejected.

use thiserror::Error;

/// Errors that can occur when restoring or configuring a generator
#[derive(Debug, Error)]
pub enum RngError {
    #[error("Degenerate state: all state words are zero")]
    DegenerateState,

    #[error("Invalid stream config: {0}")]
    InvalidConfig(String),

    #[error("Malformed stream config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PartialEq for RngError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RngError::DegenerateState, RngError::DegenerateState) => true,
            (RngError::InvalidConfig(a), RngError::InvalidConfig(b)) => a == b,
            // serde_json::Error has no equality; compare by rendered message
            (RngError::Json(a), RngError::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
