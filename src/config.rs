//! Tunable parameters of a run.

use serde::{Deserialize, Serialize};

use crate::error::InvalidConfig;
use crate::similarity::MetricKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on the number of neighbours consulted per pending match.
    pub neighbours: usize,
    /// Candidates are retained only if their expected value strictly exceeds this.
    pub ev_threshold: f64,
    pub metric: MetricKind,
    /// Evaluate pending matches on the rayon thread pool.
    pub parallel: bool,
    /// Shuffle the dataset with this seed before partitioning.
    pub shuffle_seed: Option<u64>,
}
impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.neighbours == 0 {
            return Err(InvalidConfig::Neighbours);
        }
        if !self.ev_threshold.is_finite() || self.ev_threshold < 0.0 {
            return Err(InvalidConfig::EvThreshold(self.ev_threshold));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neighbours: 100,
            ev_threshold: 1.0,
            metric: MetricKind::default(),
            parallel: true,
            shuffle_seed: None,
        }
    }
}
