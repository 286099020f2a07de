use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use engine::{GameError, Player};
use serde::{Deserialize, Serialize};

/// Placement of a piece by `player` on the cell at `position` (`row * size + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

impl Move {
    pub fn new(position: usize, player: Player) -> Self {
        Self { position, player }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position, self.player.to_digit())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, player) = s
            .split_once(':')
            .ok_or_else(|| GameError::Parse(format!("Expected 'position:player' but found '{}'", s)))?;

        let position = position
            .trim()
            .parse()
            .map_err(|_| GameError::Parse(format!("Invalid position '{}'", position)))?;

        let mut digits = player.trim().chars();
        let player = match (digits.next(), digits.next()) {
            (Some(digit), None) => Player::from_digit(digit)?,
            _ => return Err(GameError::Parse(format!("Invalid player '{}'", player))),
        };

        Ok(Self::new(position, player))
    }
}
