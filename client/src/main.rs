mod cli;

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, GameCommand};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use engine::{GameEngine, GameState, Player};
use env_logger::Env;
use hex::{HexOptions, HexSymmetries};
use ledge::LedgeOptions;
use log::info;
use mcts::MCTSOptions;
use model::{Policy, ReplayBuffer, UniformPolicy};
use nim::NimOptions;
use self_play::{play_self, SelfPlayOptions};
use serde::Serialize;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Hex(args) => {
            let config = load_config(args, "hex")?;
            let options = self_play_options(&config, args)?;
            let hex_options: HexOptions = config.load()?;

            let engine = hex::Engine::new(hex_options.board_size);
            let policy = UniformPolicy::with_symmetries(
                &engine,
                replay_buffer(&options),
                HexSymmetries::new(),
            );

            run(
                &engine,
                &policy,
                policy.replay_buffer(),
                |player| Ok(engine.initial_state(player)?),
                &config,
                &options,
            )?
        }
        Commands::Nim(args) => {
            let config = load_config(args, "nim")?;
            let options = self_play_options(&config, args)?;
            let nim_options: NimOptions = config.load()?;

            let engine = nim::Engine::new(nim_options.max_take);
            let policy = UniformPolicy::new(&engine, replay_buffer(&options));

            run(
                &engine,
                &policy,
                policy.replay_buffer(),
                |player| Ok(engine.initial_state(nim_options.pieces, player)?),
                &config,
                &options,
            )?
        }
        Commands::Ledge(args) => {
            let config = load_config(args, "ledge")?;
            let options = self_play_options(&config, args)?;
            let ledge_options: LedgeOptions = config.load()?;

            let engine = ledge::Engine::new(ledge_options.len());
            let policy = UniformPolicy::new(&engine, replay_buffer(&options));

            run(
                &engine,
                &policy,
                policy.replay_buffer(),
                |player| ledge_options.initial_state(player),
                &config,
                &options,
            )?
        }
    }

    Ok(())
}

fn load_config(args: &GameCommand, scope: &str) -> Result<ConfigLoader> {
    let config_path = args.config.relative_to_cwd()?;
    ConfigLoader::new(&config_path, scope.to_string())
        .with_context(|| format!("Failed to load the {} config from {:?}", scope, config_path))
}

fn self_play_options(config: &ConfigLoader, args: &GameCommand) -> Result<SelfPlayOptions> {
    let mut options: SelfPlayOptions = config.load()?;

    if let Some(games) = args.games {
        options.num_games = games;
    }

    if let Some(visits) = args.visits {
        options.visits = visits;
    }

    options.verbose |= args.verbose;

    Ok(options)
}

fn replay_buffer<S>(options: &SelfPlayOptions) -> ReplayBuffer<S> {
    ReplayBuffer::new(options.replay_buffer_size, options.cutoff_rate, options.seed)
}

fn run<E, P, F>(
    engine: &E,
    policy: &P,
    replay_buffer: &ReplayBuffer<E::State>,
    initial_state: F,
    config: &ConfigLoader,
    options: &SelfPlayOptions,
) -> Result<()>
where
    E: GameEngine,
    E::State: GameState + Display + Serialize,
    E::Action: Display,
    P: Policy<State = E::State>,
    F: Fn(Player) -> Result<E::State>,
{
    let mcts_options: MCTSOptions = config.load()?;

    info!("{:?}", options);
    info!("{:?}", mcts_options);

    let stats = play_self(
        engine,
        policy,
        Some(replay_buffer),
        initial_state,
        options,
        &mcts_options,
    )?;

    info!(
        "Player 1: {} wins, Player 2: {} wins, {} cases collected",
        stats.player_one_wins,
        stats.player_two_wins(),
        replay_buffer.len()
    );

    Ok(())
}
