use std::fmt::Display;

use anyhow::{anyhow, Result};
use engine::{GameEngine, GameState, Player};
use log::{debug, info};
use mcts::{MCTSOptions, MCTS};
use model::Policy;

use super::{GameRecord, SelfPlayOptions};

/// Plays one episode from `game_state` to the end. The search tree is carried from move to move
/// and pruned below every move played.
pub fn play_self_one<E, P>(
    game_engine: &E,
    policy: &P,
    mut game_state: E::State,
    options: &SelfPlayOptions,
    mcts_options: MCTSOptions,
) -> Result<GameRecord<E::Action>>
where
    E: GameEngine,
    E::State: GameState + Display,
    E::Action: Display,
    P: Policy<State = E::State>,
{
    let starting_player = game_engine.player_to_move(&game_state);
    let mut mcts = MCTS::new(game_state.clone(), game_engine, policy, mcts_options);
    let mut actions = Vec::new();

    while !game_engine.is_terminal(&game_state) {
        let mover = game_engine.player_to_move(&game_state);
        let res = mcts.run(&game_state, options.visits)?;

        game_engine.play_action(&mut game_state, &res.action)?;

        if options.verbose {
            info!("Player {} {}: {}", mover, res.action, game_state);
        } else {
            debug!("Player {} {}: {}", mover, res.action, game_state);
        }

        actions.push(res.action);
    }

    let winner: Player = game_engine
        .winner(&game_state)
        .ok_or_else(|| anyhow!("Expected a winner at terminal state {}", game_state))?;

    Ok(GameRecord::new(starting_player, actions, winner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{ReplayBuffer, UniformPolicy};
    use nim::{Engine, Take};

    #[test]
    fn test_play_self_one_plays_to_the_end() {
        let engine = Engine::new(3);
        let policy = UniformPolicy::new(&engine, ReplayBuffer::new(100, 0.3, Some(1)));
        let state = engine.initial_state(7, Player::Two).unwrap();
        let options = SelfPlayOptions {
            visits: 100,
            ..Default::default()
        };

        let record = play_self_one(
            &engine,
            &policy,
            state,
            &options,
            MCTSOptions::new(1.0, 5, 0.1, Some(1)),
        )
        .unwrap();

        let removed: usize = record.actions().iter().map(|Take(n)| n).sum();
        assert_eq!(removed, 7);
        assert_eq!(record.starting_player(), Player::Two);
        assert_eq!(policy.replay_buffer().len(), record.actions().len());

        let last_mover = if record.actions().len() % 2 == 1 {
            Player::Two
        } else {
            Player::One
        };
        assert_eq!(record.winner(), last_mover);
    }
}
