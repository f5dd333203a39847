//! Error types for the game engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game session.
///
/// Invalid input is the only failure mode the game models: it is rejected
/// at the prompt boundary and never advances or mutates the session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input outside the enumerated option set for the current prompt.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
}
