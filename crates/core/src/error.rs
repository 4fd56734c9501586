//! Client-domain error model.

use thiserror::Error;

/// Client-domain error.
///
/// Keep this focused on deterministic failures. Transport and storage
/// concerns belong to the client and state crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CoreError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
