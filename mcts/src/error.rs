use engine::GameError;
use thiserror::Error;

/// Failures that abort a search. None of these are recoverable: each one means the tree or a game
/// engine is in a state it should never reach.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Expected exactly one active parent edge into {state} but found {active}")]
    AmbiguousParent { state: String, active: usize },

    #[error("State {0} is not in the search tree")]
    UnknownState(String),

    #[error("Ran out of legal actions at non-terminal state {0}")]
    NoLegalActions(String),

    #[error("State {0} has no children to choose from")]
    NoChildren(String),
}
