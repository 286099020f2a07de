use anyhow::{anyhow, Result};
use common::Config;

use super::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone)]
pub struct HexOptions {
    pub board_size: usize,
}

impl Default for HexOptions {
    fn default() -> Self {
        Self { board_size: 4 }
    }
}

impl Config for HexOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let board_size = config
            .get("board_size")
            .and_then(|v| v.as_usize())
            .unwrap_or(HexOptions::default().board_size);

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(anyhow!(
                "board_size must be between {} and {} but was {}",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                board_size
            ));
        }

        Ok(Self { board_size })
    }
}
