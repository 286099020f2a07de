use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use engine::{GameError, Player};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Copper,
    Gold,
}

impl Coin {
    fn to_digit(self) -> char {
        match self {
            Coin::Copper => '1',
            Coin::Gold => '2',
        }
    }
}

/// A row of cells with cell 0 at the ledge. Coins slide towards the ledge and are picked up from
/// it. Whoever picks up the gold coin wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    cells: Vec<Option<Coin>>,
    player_to_move: Player,
}

impl GameState {
    pub fn new(cells: Vec<Option<Coin>>, player_to_move: Player) -> Result<Self, GameError> {
        let gold = cells.iter().filter(|c| **c == Some(Coin::Gold)).count();
        if gold != 1 {
            return Err(GameError::InvalidSetup(format!(
                "A board must start with exactly one gold coin but had {}",
                gold
            )));
        }

        Ok(Self {
            cells,
            player_to_move,
        })
    }

    pub fn cells(&self) -> &[Option<Coin>] {
        &self.cells
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    /// Pick up first, then slides from the rightmost coin, nearest destination first.
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.is_terminal() {
            return actions;
        }

        if self.cells.first().copied().flatten().is_some() {
            actions.push(Action::PickUp);
        }

        for from in (1..self.cells.len()).rev() {
            if self.cells[from].is_none() {
                continue;
            }

            for to in (0..from).rev() {
                if self.cells[to].is_some() {
                    break;
                }
                actions.push(Action::Slide { from, to });
            }
        }

        actions
    }

    pub fn apply(&self, action: &Action) -> Result<Self, GameError> {
        let mut cells = self.cells.clone();

        match *action {
            Action::PickUp => {
                if cells.first().copied().flatten().is_none() {
                    return Err(GameError::InvalidMove(
                        "There is no coin on the ledge to pick up".to_string(),
                    ));
                }
                cells[0] = None;
            }
            Action::Slide { from, to } => {
                if !self.is_clear_slide(from, to) {
                    return Err(GameError::InvalidMove(format!(
                        "Cannot slide from cell {} to {} on {}",
                        from, to, self
                    )));
                }
                cells.swap(from, to);
            }
        }

        Ok(Self {
            cells,
            player_to_move: self.player_to_move.opponent(),
        })
    }

    fn is_clear_slide(&self, from: usize, to: usize) -> bool {
        to < from
            && from < self.cells.len()
            && self.cells[from].is_some()
            && self.cells[to..from].iter().all(Option::is_none)
    }

    /// The gold coin has been picked up.
    pub fn is_terminal(&self) -> bool {
        !self.cells.contains(&Some(Coin::Gold))
    }

    pub fn derive_action(&self, child: &Self) -> Result<Action, GameError> {
        let inconsistent = || {
            GameError::InconsistentState(format!(
                "{} is not reached from {} by a single move",
                child, self
            ))
        };

        if self.cells.len() != child.cells.len()
            || child.player_to_move != self.player_to_move.opponent()
        {
            return Err(inconsistent());
        }

        let diffs: Vec<usize> = (0..self.cells.len())
            .filter(|i| self.cells[*i] != child.cells[*i])
            .collect();

        let action = match diffs[..] {
            [0] if self.cells[0].is_some() && child.cells[0].is_none() => Action::PickUp,
            [to, from] => Action::Slide { from, to },
            _ => return Err(inconsistent()),
        };

        match self.apply(&action) {
            Ok(ref expected) if expected == child => Ok(action),
            _ => Err(inconsistent()),
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let digit = cell.map(Coin::to_digit).unwrap_or('0');
            write!(f, "{}", digit)?;
        }

        write!(f, ":{}", self.player_to_move.to_digit())
    }
}

impl FromStr for GameState {
    type Err = GameError;

    /// Parses one digit per cell (`0` empty, `1` copper, `2` gold), `:`, the mover.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (board, mover) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| GameError::Parse(format!("Expected 'cells:mover' but found '{}'", s)))?;

        let cells = board
            .chars()
            .map(|digit| match digit {
                '0' => Ok(None),
                '1' => Ok(Some(Coin::Copper)),
                '2' => Ok(Some(Coin::Gold)),
                other => Err(GameError::Parse(format!("Invalid cell '{}'", other))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut digits = mover.chars();
        let player_to_move = match (digits.next(), digits.next()) {
            (Some(digit), None) => Player::from_digit(digit)?,
            _ => return Err(GameError::Parse(format!("Invalid mover '{}'", mover))),
        };

        let gold = cells.iter().filter(|c| **c == Some(Coin::Gold)).count();
        if gold > 1 {
            return Err(GameError::Parse(format!("{} gold coins on one board", gold)));
        }

        Ok(Self {
            cells,
            player_to_move,
        })
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
