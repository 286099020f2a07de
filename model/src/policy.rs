/// Move-evaluation oracle consulted during rollouts.
///
/// `predict` returns one probability per action bucket (see `GameEngine::action_space_size`), zero
/// for illegal actions. `add_case` receives the visit distribution found by a search as a
/// training target; it must return promptly and never fail the search.
pub trait Policy {
    type State;

    fn predict(&self, game_state: &Self::State) -> Vec<f32>;

    fn add_case(&self, game_state: &Self::State, distribution: &[f32]);
}

impl<P> Policy for &P
where
    P: Policy,
{
    type State = P::State;

    fn predict(&self, game_state: &Self::State) -> Vec<f32> {
        (*self).predict(game_state)
    }

    fn add_case(&self, game_state: &Self::State, distribution: &[f32]) {
        (*self).add_case(game_state, distribution)
    }
}
