use engine::{GameEngine, GameError, Player};

use super::{Action, GameState};

pub struct Engine {
    len: usize,
}

impl Engine {
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.legal_actions()
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, GameError> {
        game_state.apply(action)
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
        parent.derive_action(child)
    }

    fn action_space_size(&self) -> usize {
        1 + self.len * self.len
    }

    fn action_index(&self, action: &Self::Action) -> usize {
        match action {
            Action::PickUp => 0,
            Action::Slide { from, to } => 1 + from * self.len + to,
        }
    }
}
