use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::GameError;

/// One of the two seats. `Player::One` is the fixed maximizing identity that search values
/// are expressed relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::One
    }

    pub fn as_usize(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn to_digit(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }

    pub fn from_digit(digit: char) -> Result<Self, GameError> {
        match digit {
            '1' => Ok(Player::One),
            '2' => Ok(Player::Two),
            other => Err(GameError::Parse(format!(
                "Expected player digit 1 or 2 but found '{}'",
                other
            ))),
        }
    }

    /// Outcome of a finished game from `Player::One`'s perspective.
    pub fn outcome(winner: Player) -> f32 {
        if winner.is_maximizing() {
            1.0
        } else {
            -1.0
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}
