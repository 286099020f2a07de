use anyhow::{anyhow, Result};
use common::Config;

#[derive(Debug, Clone)]
pub struct NimOptions {
    pub pieces: usize,
    pub max_take: usize,
}

impl Config for NimOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let options = Self {
            pieces: config
                .get("pieces")
                .and_then(|v| v.as_usize())
                .unwrap_or(10),
            max_take: config
                .get("max_take")
                .and_then(|v| v.as_usize())
                .unwrap_or(3),
        };

        if options.max_take == 0 {
            return Err(anyhow!("max_take must be at least 1"));
        }

        Ok(options)
    }
}
