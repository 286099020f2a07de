use super::{GameError, Player};

/// Rules of a two-player, perfect-information game.
///
/// The search is written against this trait only. Each variant provides one implementation which is
/// selected once when an episode is constructed.
pub trait GameEngine {
    type Action;
    type State;

    /// All legal actions in a deterministic order. Empty for terminal states of token games.
    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, GameError>;

    /// Applies the action to a disposable working copy.
    fn play_action(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<(), GameError> {
        *game_state = self.take_action(game_state, action)?;
        Ok(())
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player;

    fn is_terminal(&self, game_state: &Self::State) -> bool;

    /// The action that turns `parent` into `child`.
    fn derive_action(
        &self,
        parent: &Self::State,
        child: &Self::State,
    ) -> Result<Self::Action, GameError>;

    /// Number of buckets in a policy or visit distribution.
    fn action_space_size(&self) -> usize;

    /// Bucket of an action within `0..action_space_size()`.
    fn action_index(&self, action: &Self::Action) -> usize;

    /// The player that made the last move wins.
    fn winner(&self, game_state: &Self::State) -> Option<Player> {
        if self.is_terminal(game_state) {
            Some(self.player_to_move(game_state).opponent())
        } else {
            None
        }
    }
}
