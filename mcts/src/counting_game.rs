use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};

use engine::{GameEngine, GameError, Player};
use model::Policy;

pub const TARGET: usize = 10;

/// Players take turns adding one or two to a shared count. Whoever reaches the target wins.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub count: usize,
    pub player_to_move: Player,
}

impl CountingGameState {
    pub fn new(count: usize, player_to_move: Player) -> Self {
        Self {
            count,
            player_to_move,
        }
    }

    pub fn initial() -> Self {
        Self::new(0, Player::One)
    }
}

impl Display for CountingGameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.count, self.player_to_move)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Add(pub usize);

impl Display for Add {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

pub struct CountingGameEngine {}

impl CountingGameEngine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for CountingGameEngine {
    type Action = Add;
    type State = CountingGameState;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        if self.is_terminal(game_state) {
            return Vec::new();
        }

        vec![Add(1), Add(2)]
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, GameError> {
        if self.is_terminal(game_state) || !(1..=2).contains(&action.0) {
            return Err(GameError::InvalidMove(format!("{} at {}", action, game_state)));
        }

        Ok(CountingGameState::new(
            game_state.count + action.0,
            game_state.player_to_move.opponent(),
        ))
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        game_state.player_to_move
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.count >= TARGET
    }

    fn derive_action(
        &self,
        parent: &Self::State,
        child: &Self::State,
    ) -> Result<Self::Action, GameError> {
        match child.count.checked_sub(parent.count) {
            Some(n @ 1..=2) => Ok(Add(n)),
            _ => Err(GameError::InconsistentState(format!(
                "{} does not follow {}",
                child, parent
            ))),
        }
    }

    fn action_space_size(&self) -> usize {
        2
    }

    fn action_index(&self, action: &Self::Action) -> usize {
        action.0 - 1
    }
}

/// Always prefers adding two and remembers every case it is given.
pub struct CountingPolicy {
    pub cases: RefCell<Vec<(CountingGameState, Vec<f32>)>>,
}

impl CountingPolicy {
    pub fn new() -> Self {
        Self {
            cases: RefCell::new(Vec::new()),
        }
    }
}

impl Policy for CountingPolicy {
    type State = CountingGameState;

    fn predict(&self, _game_state: &Self::State) -> Vec<f32> {
        vec![0.2, 0.8]
    }

    fn add_case(&self, game_state: &Self::State, distribution: &[f32]) {
        self.cases
            .borrow_mut()
            .push((game_state.clone(), distribution.to_vec()));
    }
}
