use std::fmt::Display;
use std::time::Instant;

use anyhow::Result;
use engine::{GameEngine, GameState, Player};
use log::info;
use mcts::MCTSOptions;
use model::{Policy, ReplayBuffer};
use serde::Serialize;

use super::{play_self_one, SelfPlayOptions, SelfPlayPersistance};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayStats {
    pub games: usize,
    pub player_one_wins: usize,
}

impl SelfPlayStats {
    pub fn player_two_wins(&self) -> usize {
        self.games - self.player_one_wins
    }

    pub fn player_one_win_rate(&self) -> f32 {
        common::div_or_zero(self.player_one_wins as f32, self.games as f32)
    }
}

/// Plays `num_games` episodes, tallying wins for player One. When a replay buffer and a cases
/// directory are given, a snapshot is written every `save_interval` episodes.
pub fn play_self<E, P, F>(
    game_engine: &E,
    policy: &P,
    replay_buffer: Option<&ReplayBuffer<E::State>>,
    initial_state: F,
    options: &SelfPlayOptions,
    mcts_options: &MCTSOptions,
) -> Result<SelfPlayStats>
where
    E: GameEngine,
    E::State: GameState + Display + Serialize,
    E::Action: Display,
    P: Policy<State = E::State>,
    F: Fn(Player) -> Result<E::State>,
{
    let starting_run_time = Instant::now();
    let mut rng = common::create_rng(options.seed);
    let mut stats = SelfPlayStats::default();

    let persistance = match (&options.cases_dir, options.save_interval) {
        (Some(dir), interval) if interval > 0 => Some(SelfPlayPersistance::new(dir.clone())?),
        _ => None,
    };

    for episode in 1..=options.num_games {
        let starting_player = options.starting_player.pick(&mut rng);
        let game_state = initial_state(starting_player)?;

        info!("Starting game {}: {}", episode, game_state);

        let mcts_options = MCTSOptions {
            seed: mcts_options
                .seed
                .map(|seed| seed.wrapping_add(episode as u64)),
            ..mcts_options.clone()
        };

        let record = play_self_one(game_engine, policy, game_state, options, mcts_options)?;

        stats.games += 1;
        if record.winner() == Player::One {
            stats.player_one_wins += 1;
        }

        info!(
            "Game {} won by player {} after {} moves",
            episode,
            record.winner(),
            record.actions().len()
        );

        if let (Some(persistance), Some(replay_buffer)) = (&persistance, replay_buffer) {
            if episode % options.save_interval == 0 {
                persistance.write(replay_buffer, episode)?;
            }
        }
    }

    info!(
        "Player 1 won {} of {} games ({:.1}%) in {:.1}s",
        stats.player_one_wins,
        stats.games,
        stats.player_one_win_rate() * 100.0,
        starting_run_time.elapsed().as_secs_f32()
    );

    Ok(stats)
}
