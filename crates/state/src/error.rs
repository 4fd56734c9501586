//! State-layer error model.

use thiserror::Error;

pub type StateResult<T> = Result<T, StateError>;

/// Failure while loading or saving client-side state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("state (de)serialization failure: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}
