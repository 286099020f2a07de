use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use engine::{GameError, Player};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Take;

/// A heap of `pieces` from which each turn removes between one and `max_take` pieces.
/// Whoever takes the last piece wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pieces: usize,
    max_take: usize,
    player_to_move: Player,
}

impl GameState {
    pub fn new(pieces: usize, max_take: usize, player_to_move: Player) -> Result<Self, GameError> {
        if max_take == 0 {
            return Err(GameError::InvalidSetup(
                "At least one piece must be removable per turn".to_string(),
            ));
        }

        Ok(Self {
            pieces,
            max_take,
            player_to_move,
        })
    }

    pub fn pieces(&self) -> usize {
        self.pieces
    }

    pub fn max_take(&self) -> usize {
        self.max_take
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn legal_takes(&self) -> Vec<Take> {
        (1..=self.max_take.min(self.pieces)).map(Take).collect()
    }

    pub fn take(&self, take: &Take) -> Result<Self, GameError> {
        if take.0 == 0 || take.0 > self.max_take || take.0 > self.pieces {
            return Err(GameError::InvalidMove(format!(
                "Cannot remove {} pieces from {} when at most {} may be taken",
                take.0, self.pieces, self.max_take
            )));
        }

        Ok(Self {
            pieces: self.pieces - take.0,
            max_take: self.max_take,
            player_to_move: self.player_to_move.opponent(),
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.pieces == 0
    }

    pub fn derive_take(&self, child: &Self) -> Result<Take, GameError> {
        let removed = self.pieces.checked_sub(child.pieces).unwrap_or_default();

        if self.max_take != child.max_take
            || child.player_to_move != self.player_to_move.opponent()
            || removed == 0
            || removed > self.max_take
        {
            return Err(GameError::InconsistentState(format!(
                "{} is not reached from {} by a single move",
                child, self
            )));
        }

        Ok(Take(removed))
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}:{}",
            self.pieces,
            self.max_take,
            self.player_to_move.to_digit()
        )
    }
}

impl FromStr for GameState {
    type Err = GameError;

    /// Parses `pieces,max_take:mover`, e.g. `10,3:1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || GameError::Parse(format!("Expected 'pieces,max_take:mover' but found '{}'", s));

        let (heap, mover) = s.trim().split_once(':').ok_or_else(parse_err)?;
        let (pieces, max_take) = heap.split_once(',').ok_or_else(parse_err)?;

        let pieces = pieces.parse().map_err(|_| parse_err())?;
        let max_take = max_take.parse().map_err(|_| parse_err())?;

        let mut digits = mover.chars();
        let player_to_move = match (digits.next(), digits.next()) {
            (Some(digit), None) => Player::from_digit(digit)?,
            _ => return Err(parse_err()),
        };

        Self::new(pieces, max_take, player_to_move)
    }
}

impl Serialize for GameState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_take_is_a_setup_error() {
        assert!(matches!(
            GameState::new(5, 0, Player::One),
            Err(GameError::InvalidSetup(_))
        ));
        assert!(matches!("5,0:1".parse::<GameState>(), Err(GameError::InvalidSetup(_))));
    }

    #[test]
    fn test_legal_takes_are_bounded_by_heap() {
        let state = GameState::new(2, 3, Player::One).unwrap();

        assert_eq!(state.legal_takes(), vec![Take(1), Take(2)]);
    }

    #[test]
    fn test_take_passes_the_turn() {
        let state = GameState::new(10, 3, Player::One).unwrap();
        let next = state.take(&Take(3)).unwrap();

        assert_eq!(next.pieces(), 7);
        assert_eq!(next.player_to_move(), Player::Two);
    }

    #[test]
    fn test_take_rejects_illegal_counts() {
        let state = GameState::new(2, 3, Player::One).unwrap();

        assert!(matches!(state.take(&Take(0)), Err(GameError::InvalidMove(_))));
        assert!(matches!(state.take(&Take(3)), Err(GameError::InvalidMove(_))));
    }

    #[test]
    fn test_empty_heap_is_terminal() {
        let state = GameState::new(1, 3, Player::Two).unwrap();
        let last = state.take(&Take(1)).unwrap();

        assert!(last.is_terminal());
        assert!(last.legal_takes().is_empty());
    }

    #[test]
    fn test_derive_take() {
        let parent: GameState = "10,3:1".parse().unwrap();

        assert_eq!(parent.derive_take(&"8,3:2".parse().unwrap()), Ok(Take(2)));
        assert!(parent.derive_take(&"10,3:2".parse().unwrap()).is_err());
        assert!(parent.derive_take(&"6,3:2".parse().unwrap()).is_err());
        assert!(parent.derive_take(&"8,3:1".parse().unwrap()).is_err());
    }

    #[test]
    fn test_wire_format_round_trip() {
        let state: GameState = "10,3:2".parse().unwrap();

        assert_eq!(state.to_string(), "10,3:2");
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"10,3:2\"");
    }

    #[test]
    fn test_wire_format_rejects_garbage() {
        assert!("10:1".parse::<GameState>().is_err());
        assert!("10,0:1".parse::<GameState>().is_err());
        assert!("10,3:3".parse::<GameState>().is_err());
    }
}
