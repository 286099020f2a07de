use anyhow::Result;
use common::Config;

#[derive(Debug, Clone)]
pub struct MCTSOptions {
    /// Exploration constant of the UCT rule.
    pub c: f32,
    /// Number of UCT descents after which an iteration simulates from where it stands.
    pub max_depth: usize,
    /// Chance of a rollout move being picked uniformly among supported actions instead of greedily.
    pub epsilon: f32,
    pub seed: Option<u64>,
}

impl MCTSOptions {
    pub fn new(c: f32, max_depth: usize, epsilon: f32, seed: Option<u64>) -> Self {
        Self {
            c,
            max_depth,
            epsilon,
            seed,
        }
    }
}

impl Default for MCTSOptions {
    fn default() -> Self {
        Self::new(1.0, 5, 0.1, None)
    }
}

impl Config for MCTSOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let default = Self::default();

        Ok(Self {
            c: config
                .get("c")
                .and_then(|v| v.as_f32())
                .unwrap_or(default.c),
            max_depth: config
                .get("max_depth")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.max_depth),
            epsilon: config
                .get("epsilon")
                .and_then(|v| v.as_f32())
                .unwrap_or(default.epsilon),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
