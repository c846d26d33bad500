use crate::error::Result;
use crate::search_algorithms::{DistanceMatrix, Strategy};
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

const RANDOM_MAX_COST: u32 = 99;

/// Settings for the demo binary, read from JSON.
///
/// Every field is optional; missing ones fall back to the four-city demo.
///
/// ```json
/// {
///   "matrix": [[0, 29, 20, 21], [29, 0, 15, 17], [20, 15, 0, 28], [21, 17, 28, 0]],
///   "start_city": 0,
///   "strategies": ["bfs", "uniform_cost", "a_star"],
///   "animate": true,
///   "step_delay_ms": 300
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub matrix: DistanceMatrix,
    pub start_city: usize,
    pub strategies: Vec<Strategy>,
    pub animate: bool,
    pub step_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            matrix: DistanceMatrix::demo(),
            start_city: 0,
            strategies: Strategy::ALL.to_vec(),
            animate: true,
            step_delay_ms: 300,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Demo settings around a random symmetric instance of `size` cities.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self {
            matrix: DistanceMatrix::random(size, RANDOM_MAX_COST, rng),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.matrix.is_empty() {
            return Ok(());
        }
        self.matrix.check_city(self.start_city)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
