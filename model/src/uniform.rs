use engine::GameEngine;

use super::{NoSymmetries, Policy, ReplayBuffer, Symmetries, TrainingCase};

/// Uniform prediction over the legal actions of a state. Rollouts guided by it are plain random
/// playouts. Cases are expanded through `Sym` and kept in a replay buffer for a learner to consume.
pub struct UniformPolicy<'e, E, Sym>
where
    E: GameEngine,
{
    engine: &'e E,
    replay_buffer: ReplayBuffer<E::State>,
    symmetries: Sym,
}

impl<'e, E> UniformPolicy<'e, E, NoSymmetries<E::State>>
where
    E: GameEngine,
{
    pub fn new(engine: &'e E, replay_buffer: ReplayBuffer<E::State>) -> Self {
        Self::with_symmetries(engine, replay_buffer, NoSymmetries::new())
    }
}

impl<'e, E, Sym> UniformPolicy<'e, E, Sym>
where
    E: GameEngine,
{
    pub fn with_symmetries(
        engine: &'e E,
        replay_buffer: ReplayBuffer<E::State>,
        symmetries: Sym,
    ) -> Self {
        Self {
            engine,
            replay_buffer,
            symmetries,
        }
    }

    pub fn replay_buffer(&self) -> &ReplayBuffer<E::State> {
        &self.replay_buffer
    }
}

impl<E, Sym> Policy for UniformPolicy<'_, E, Sym>
where
    E: GameEngine,
    Sym: Symmetries<State = E::State>,
{
    type State = E::State;

    fn predict(&self, game_state: &Self::State) -> Vec<f32> {
        let mut distribution = vec![0.0; self.engine.action_space_size()];
        let legal_actions = self.engine.legal_actions(game_state);
        let probability = 1.0 / legal_actions.len().max(1) as f32;

        for action in &legal_actions {
            distribution[self.engine.action_index(action)] = probability;
        }

        distribution
    }

    fn add_case(&self, game_state: &Self::State, distribution: &[f32]) {
        for (state, distribution) in self.symmetries.symmetries(game_state, distribution) {
            self.replay_buffer.push(TrainingCase::new(state, distribution));
        }
    }
}
