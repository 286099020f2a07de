use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use common::Config;
use engine::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingPlayer {
    P1,
    P2,
    Random,
}

impl StartingPlayer {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        match self {
            StartingPlayer::P1 => Player::One,
            StartingPlayer::P2 => Player::Two,
            StartingPlayer::Random => {
                if rng.gen::<bool>() {
                    Player::One
                } else {
                    Player::Two
                }
            }
        }
    }
}

impl FromStr for StartingPlayer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p1" | "1" | "one" => Ok(StartingPlayer::P1),
            "p2" | "2" | "two" => Ok(StartingPlayer::P2),
            "random" => Ok(StartingPlayer::Random),
            other => Err(anyhow!(
                "starting_player must be one of p1, p2 or random but was '{}'",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelfPlayOptions {
    pub num_games: usize,
    pub visits: usize,
    pub starting_player: StartingPlayer,
    /// Log every move at info level instead of debug.
    pub verbose: bool,
    /// Episodes between replay buffer snapshots. Zero disables snapshots.
    pub save_interval: usize,
    pub cases_dir: Option<PathBuf>,
    pub replay_buffer_size: usize,
    pub cutoff_rate: f32,
    pub seed: Option<u64>,
}

impl Default for SelfPlayOptions {
    fn default() -> Self {
        Self {
            num_games: 10,
            visits: 500,
            starting_player: StartingPlayer::P1,
            verbose: false,
            save_interval: 0,
            cases_dir: None,
            replay_buffer_size: model::DEFAULT_MAX_SIZE,
            cutoff_rate: model::DEFAULT_CUTOFF_RATE,
            seed: None,
        }
    }
}

impl Config for SelfPlayOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let default = Self::default();

        let starting_player = match config.get("starting_player").and_then(|v| v.as_string()) {
            Some(value) => value.parse()?,
            None => default.starting_player,
        };

        let cases_dir = match config.get("cases_dir") {
            Some(_) => Some(config.get_relative_path("cases_dir")?),
            None => None,
        };

        let options = Self {
            num_games: config
                .get("num_games")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.num_games),
            visits: config
                .get("visits")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.visits),
            starting_player,
            verbose: config
                .get("verbose")
                .and_then(|v| v.as_bool())
                .unwrap_or(default.verbose),
            save_interval: config
                .get("save_interval")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.save_interval),
            cases_dir,
            replay_buffer_size: config
                .get("replay_buffer_size")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.replay_buffer_size),
            cutoff_rate: config
                .get("cutoff_rate")
                .and_then(|v| v.as_f32())
                .unwrap_or(default.cutoff_rate),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        };

        if options.replay_buffer_size == 0 {
            return Err(anyhow!("replay_buffer_size must be at least 1"));
        }

        if !(options.cutoff_rate > 0.0 && options.cutoff_rate <= 1.0) {
            return Err(anyhow!(
                "cutoff_rate must be in (0, 1] but was {}",
                options.cutoff_rate
            ));
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ConfigLoader;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_starting_player_parse() {
        assert_eq!("P1".parse::<StartingPlayer>().unwrap(), StartingPlayer::P1);
        assert_eq!("two".parse::<StartingPlayer>().unwrap(), StartingPlayer::P2);
        assert_eq!(
            "random".parse::<StartingPlayer>().unwrap(),
            StartingPlayer::Random
        );
        assert!("p3".parse::<StartingPlayer>().is_err());
    }

    #[test]
    fn test_random_starting_player_picks_both() {
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<_> = (0..50)
            .map(|_| StartingPlayer::Random.pick(&mut rng))
            .collect();

        assert!(picks.contains(&Player::One));
        assert!(picks.contains(&Player::Two));
    }

    #[test]
    fn test_load_self_play_options() {
        let conf = r#"
            num_games = 3
            nim {
                visits = 50
                starting_player = random
                verbose = true
                seed = 9
            }
        "#;
        let config = ConfigLoader::from_contents(conf, "nim".to_string()).unwrap();
        let options: SelfPlayOptions = config.load().unwrap();

        assert_eq!(options.num_games, 3);
        assert_eq!(options.visits, 50);
        assert_eq!(options.starting_player, StartingPlayer::Random);
        assert!(options.verbose);
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.save_interval, 0);
        assert!(options.cases_dir.is_none());
        assert_eq!(options.replay_buffer_size, 2000);
    }

    #[test]
    fn test_rejects_empty_replay_buffer() {
        let config = ConfigLoader::from_contents("replay_buffer_size = 0", "nim".to_string()).unwrap();

        assert!(config.load::<SelfPlayOptions>().is_err());
    }

    #[test]
    fn test_rejects_cutoff_rate_out_of_range() {
        let config = ConfigLoader::from_contents("cutoff_rate = 1.5", "nim".to_string()).unwrap();
        assert!(config.load::<SelfPlayOptions>().is_err());

        let config = ConfigLoader::from_contents("cutoff_rate = 0.0", "nim".to_string()).unwrap();
        assert!(config.load::<SelfPlayOptions>().is_err());
    }
}
