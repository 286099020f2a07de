use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use model::ReplayBuffer;
use serde::Serialize;

/// Writes replay buffer snapshots under a single directory.
pub struct SelfPlayPersistance {
    cases_directory: PathBuf,
}

impl SelfPlayPersistance {
    pub fn new(cases_directory: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cases_directory).with_context(|| {
            format!("Failed to create cases directory {:?}", cases_directory)
        })?;

        Ok(Self { cases_directory })
    }

    pub fn write<S: Serialize>(
        &self,
        replay_buffer: &ReplayBuffer<S>,
        episode: usize,
    ) -> Result<PathBuf> {
        let path = ReplayBuffer::<S>::snapshot_path(&self.cases_directory, episode);
        replay_buffer.write(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{read_cases, TrainingCase};

    #[test]
    fn test_write_snapshot() {
        let dir = std::env::temp_dir().join(format!("self_play_persistance_{}", std::process::id()));
        let persistance = SelfPlayPersistance::new(dir.clone()).unwrap();
        let buffer = ReplayBuffer::new(10, 0.3, Some(1));
        buffer.push(TrainingCase::new("0201:2".to_string(), vec![1.0, 0.0]));

        let path = persistance.write(&buffer, 4).unwrap();
        let cases: Vec<TrainingCase<String>> = read_cases(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(path.ends_with("cases_4.json.gz"));
        assert_eq!(cases, buffer.cases());
    }
}
