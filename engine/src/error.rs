use thiserror::Error;

/// Rule violations raised by a game engine. These indicate a bug in the caller, not bad luck,
/// and are never recovered from inside a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),

    #[error("Inconsistent states: {0}")]
    InconsistentState(String),

    #[error("Failed to parse: {0}")]
    Parse(String),
}
