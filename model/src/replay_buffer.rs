use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};
use parking_lot::Mutex;
use rand::prelude::{SliceRandom, StdRng};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::TrainingCase;

pub const DEFAULT_MAX_SIZE: usize = 2000;
pub const DEFAULT_CUTOFF_RATE: f32 = 0.3;

/// Bounded store of training cases produced by search.
///
/// Once `max_size` is exceeded a random case from the oldest `cutoff_rate` share of the buffer is
/// evicted. The very first case is never evicted. A `max_size` of zero is treated as one.
pub struct ReplayBuffer<S> {
    cases: Mutex<Vec<TrainingCase<S>>>,
    max_size: usize,
    cutoff_rate: f32,
    rng: Mutex<StdRng>,
}

impl<S> ReplayBuffer<S> {
    pub fn new(max_size: usize, cutoff_rate: f32, seed: Option<u64>) -> Self {
        let max_size = max_size.max(1);

        Self {
            cases: Mutex::new(Vec::with_capacity(max_size + 1)),
            max_size,
            cutoff_rate,
            rng: Mutex::new(common::create_rng(seed)),
        }
    }

    pub fn push(&self, case: TrainingCase<S>) {
        let mut cases = self.cases.lock();
        cases.push(case);

        if cases.len() > self.max_size {
            let upper = ((self.max_size as f32 * self.cutoff_rate).floor() as usize)
                .clamp(1, cases.len() - 1);
            let index = self.rng.lock().gen_range(1..=upper);
            cases.remove(index);
            debug!("Replay buffer full, evicted case {}", index);
        }
    }

    pub fn len(&self) -> usize {
        self.cases.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl<S> ReplayBuffer<S>
where
    S: Clone,
{
    /// A random mini-batch. The whole buffer is returned when it holds fewer than `batch_size` cases.
    pub fn sample<R: Rng + ?Sized>(&self, batch_size: usize, rng: &mut R) -> Vec<TrainingCase<S>> {
        let cases = self.cases.lock();

        if cases.len() < batch_size {
            return cases.clone();
        }

        cases.choose_multiple(rng, batch_size).cloned().collect()
    }

    pub fn cases(&self) -> Vec<TrainingCase<S>> {
        self.cases.lock().clone()
    }
}

impl<S> ReplayBuffer<S>
where
    S: Serialize,
{
    /// Writes the current contents as gzip compressed json.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create replay buffer file {:?}", path))?;
        let mut compressor = GzEncoder::new(BufWriter::new(file), Compression::default());

        let cases = self.cases.lock();
        serde_json::to_writer(&mut compressor, &*cases)?;
        compressor
            .finish()?
            .flush()
            .with_context(|| format!("Failed to flush replay buffer file {:?}", path))?;

        info!("Wrote {} cases to {:?}", cases.len(), path);

        Ok(())
    }

    pub fn snapshot_path(dir: impl AsRef<Path>, episode: usize) -> PathBuf {
        dir.as_ref().join(format!("cases_{}.json.gz", episode))
    }
}

pub fn read_cases<S: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<TrainingCase<S>>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open replay buffer file {:?}", path))?;
    let content = GzDecoder::new(BufReader::new(file));
    let cases = serde_json::from_reader(content)?;
    Ok(cases)
}
