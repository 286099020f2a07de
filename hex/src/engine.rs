use engine::{GameEngine, GameError, Player};

use super::{GameState, Move};

pub struct Engine {
    size: usize,
}

impl Engine {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn initial_state(&self, player_to_move: Player) -> Result<GameState, GameError> {
        GameState::new(self.size, player_to_move)
    }
}

impl GameEngine for Engine {
    type Action = Move;
    type State = GameState;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.legal_moves()
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, GameError> {
        game_state.with_move(action)
    }

    fn play_action(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<(), GameError> {
        game_state.place(action)
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
        parent.derive_move(child)
    }

    fn action_space_size(&self) -> usize {
        self.size * self.size
    }

    fn action_index(&self, action: &Self::Action) -> usize {
        action.position
    }
}
