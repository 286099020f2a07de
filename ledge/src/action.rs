use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Removes the coin on the ledge cell.
    PickUp,
    /// Moves the coin at `from` left onto the empty cell `to`.
    Slide { from: usize, to: usize },
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Action::PickUp => write!(f, "picks up the coin on the ledge"),
            Action::Slide { from, to } => write!(f, "slides the coin from cell {} to {}", from, to),
        }
    }
}
