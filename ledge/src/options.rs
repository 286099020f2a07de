use anyhow::{Context, Result};
use common::Config;

use super::GameState;

#[derive(Debug, Clone)]
pub struct LedgeOptions {
    /// Initial board as cell digits, e.g. `0102010`.
    pub board: String,
}

impl LedgeOptions {
    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn initial_state(&self, player_to_move: engine::Player) -> Result<GameState> {
        let state: GameState = format!("{}:{}", self.board, player_to_move.to_digit())
            .parse()
            .with_context(|| format!("Invalid ledge board '{}'", self.board))?;

        Ok(GameState::new(state.cells().to_vec(), player_to_move)?)
    }
}

impl Config for LedgeOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            board: config
                .get("board")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "0201".to_string()),
        })
    }
}
