//! Error types for the pairing engine.

use thiserror::Error;

use crate::pairing_engine::models::{RoundPhase, Side};

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised at the point a precondition is violated. None of them leave
/// the round half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("cannot pick {count} unique numbers in the range [{min}, {max}]")]
    InvalidRange { count: usize, min: i64, max: i64 },

    #[error("requested {requested} words but only {available} are available")]
    InsufficientPool { requested: usize, available: usize },

    #[error("{side} index {index} out of bounds for {len} rows")]
    Index { side: Side, index: usize, len: usize },

    #[error("round is {phase}, expected in progress")]
    NotInProgress { phase: RoundPhase },

    #[error("statistics are only available once the round is complete")]
    NotComplete,
}

impl GameError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        GameError::Configuration(msg.into())
    }
}
