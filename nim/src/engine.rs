use engine::{GameEngine, GameError, Player};

use super::{GameState, Take};

pub struct Engine {
    max_take: usize,
}

impl Engine {
    pub fn new(max_take: usize) -> Self {
        Self { max_take }
    }

    pub fn initial_state(&self, pieces: usize, player_to_move: Player) -> Result<GameState, GameError> {
        GameState::new(pieces, self.max_take, player_to_move)
    }
}

impl GameEngine for Engine {
    type Action = Take;
    type State = GameState;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.legal_takes()
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, GameError> {
        game_state.take(action)
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        game_state.player_to_move()
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.is_terminal()
    }

    fn derive_action(
        &self,
        parent: &Self::State,
        child: &Self::State,
    ) -> Result<Self::Action, GameError> {
        parent.derive_take(child)
    }

    fn action_space_size(&self) -> usize {
        self.max_take
    }

    fn action_index(&self, action: &Self::Action) -> usize {
        action.0 - 1
    }
}
