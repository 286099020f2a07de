use std::fmt::{self, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use engine::{GameError, Player};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{board, ConnectivityGraph, Move};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 10;

/// A Hex position: a `size * size` rhombus of cells and the player to move.
///
/// Equality and hashing cover the cells and the mover only. The connectivity graph is derived from
/// the cells and is carried along so terminal checks stay cheap.
#[derive(Clone, Debug)]
pub struct GameState {
    size: usize,
    cells: Vec<Option<Player>>,
    player_to_move: Player,
    connectivity: ConnectivityGraph,
}

impl GameState {
    pub fn new(size: usize, player_to_move: Player) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidSetup(format!(
                "Board size must be between {} and {} but was {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
            )));
        }

        Ok(Self {
            size,
            cells: vec![None; size * size],
            player_to_move,
            connectivity: ConnectivityGraph::new(size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Option<Player>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[board::position(self.size, row, col)]
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn connectivity(&self) -> &ConnectivityGraph {
        &self.connectivity
    }

    /// Empty cells in ascending position order.
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| cell.is_none().then_some(position))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.empty_positions()
            .map(|position| Move::new(position, self.player_to_move))
            .collect()
    }

    /// Places the mover's piece and passes the turn.
    pub fn place(&mut self, mv: &Move) -> Result<(), GameError> {
        if mv.position >= self.cells.len() {
            return Err(GameError::InvalidMove(format!(
                "Position {} is outside of a {}x{} board",
                mv.position, self.size, self.size
            )));
        }

        if mv.player != self.player_to_move {
            return Err(GameError::InvalidMove(format!(
                "Move {} was made by player {} but player {} is to move",
                mv, mv.player, self.player_to_move
            )));
        }

        if let Some(owner) = self.cells[mv.position] {
            return Err(GameError::InvalidMove(format!(
                "Position {} is already held by player {}",
                mv.position, owner
            )));
        }

        self.cells[mv.position] = Some(mv.player);
        self.connectivity.insert(mv.player, mv.position);
        self.player_to_move = self.player_to_move.opponent();

        Ok(())
    }

    pub fn with_move(&self, mv: &Move) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.place(mv)?;
        Ok(next)
    }

    /// Only the player that just moved can have completed a chain, so only their graph is checked.
    pub fn is_terminal(&self) -> bool {
        self.connectivity.is_connected(self.player_to_move.opponent())
    }

    /// The single placement that turns `self` into `child`.
    pub fn derive_move(&self, child: &Self) -> Result<Move, GameError> {
        if self.size != child.size {
            return Err(GameError::InconsistentState(format!(
                "Board sizes differ: {} and {}",
                self, child
            )));
        }

        let mut diffs = self
            .cells
            .iter()
            .zip(child.cells.iter())
            .enumerate()
            .filter(|(_, (parent, child))| parent != child);

        let (position, (before, after)) = match (diffs.next(), diffs.next()) {
            (Some(diff), None) => diff,
            (None, _) => {
                return Err(GameError::InconsistentState(format!(
                    "{} and {} do not differ",
                    self, child
                )))
            }
            (Some(_), Some(_)) => {
                return Err(GameError::InconsistentState(format!(
                    "{} and {} differ in more than one cell",
                    self, child
                )))
            }
        };

        if before.is_some()
            || *after != Some(self.player_to_move)
            || child.player_to_move != self.player_to_move.opponent()
        {
            return Err(GameError::InconsistentState(format!(
                "{} is not reached from {} by a move of player {}",
                child, self, self.player_to_move
            )));
        }

        Ok(Move::new(position, self.player_to_move))
    }

    /// The position seen after a half turn of the board. Both players keep their sides.
    pub fn rotated(&self) -> Self {
        self.map_cells(|position| board::rotate_180(self.size, position), false)
    }

    /// The position seen after transposing the board and swapping colours and the mover.
    /// Rows become columns, so each player's chain becomes a chain of the other player.
    pub fn swapped(&self) -> Self {
        self.map_cells(|position| board::transpose(self.size, position), true)
    }

    fn map_cells(&self, map: impl Fn(usize) -> usize, swap_players: bool) -> Self {
        let swap = |player: Player| if swap_players { player.opponent() } else { player };

        let mut cells = vec![None; self.cells.len()];
        for (position, cell) in self.cells.iter().enumerate() {
            cells[map(position)] = cell.map(swap);
        }

        Self::from_cells(self.size, cells, swap(self.player_to_move))
    }

    fn from_cells(size: usize, cells: Vec<Option<Player>>, player_to_move: Player) -> Self {
        let mut connectivity = ConnectivityGraph::new(size);
        for (position, cell) in cells.iter().enumerate() {
            if let Some(player) = cell {
                connectivity.insert(*player, position);
            }
        }

        Self {
            size,
            cells,
            player_to_move,
            connectivity,
        }
    }

    /// Multi-line rendering of the rhombus for logs.
    pub fn pretty(&self) -> String {
        let mut out = String::new();

        for row in 0..self.size {
            out.push_str(&" ".repeat(self.size - 1 - row));
            for col in 0..self.size {
                let symbol = match self.cell(row, col) {
                    None => '.',
                    Some(player) => player.to_digit(),
                };
                let _ = write!(out, "{} ", symbol);
            }
            out.push('\n');
        }

        let _ = write!(out, "Player {} to move", self.player_to_move);
        out
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.player_to_move == other.player_to_move
            && self.cells == other.cells
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.cells.hash(state);
        self.player_to_move.hash(state);
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let digit = match cell {
                None => '0',
                Some(player) => player.to_digit(),
            };
            f.write_char(digit)?;
        }

        write!(f, ":{}", self.player_to_move.to_digit())
    }
}

impl FromStr for GameState {
    type Err = GameError;

    /// Parses the wire format: one digit per cell (`0` empty, `1`/`2` a player), `:`, the mover.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (board, mover) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| GameError::Parse(format!("Expected 'cells:mover' but found '{}'", s)))?;

        let size = (1..=MAX_BOARD_SIZE)
            .find(|size| size * size == board.len())
            .ok_or_else(|| {
                GameError::Parse(format!("{} cells do not form a square board", board.len()))
            })?;

        let cells = board
            .chars()
            .map(|digit| match digit {
                '0' => Ok(None),
                digit => Player::from_digit(digit).map(Some),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut mover_digits = mover.chars();
        let player_to_move = match (mover_digits.next(), mover_digits.next()) {
            (Some(digit), None) => Player::from_digit(digit)?,
            _ => return Err(GameError::Parse(format!("Invalid mover '{}'", mover))),
        };

        Ok(Self::from_cells(size, cells, player_to_move))
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
