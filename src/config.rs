//! Game settings.
//!
//! Defaults come from the constants in `compute`; a TOML file may override
//! any subset of fields, and command-line flags override the file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::compute::{COLLECTION_TARGET, GRID_SIZE};
use crate::error::HackerError;

/// Smallest board that can spawn anything but a blocker.
pub const MIN_GRID_SIZE: usize = 3;

/// Fastest allowed step cadence.
pub const MIN_STEP_INTERVAL_MS: u64 = 50;

/// Values given on the command line; `None` keeps the underlying setting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub grid_size: Option<usize>,
    pub collection_target: Option<u32>,
    pub step_interval_ms: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Rows and columns of the board.
    pub grid_size: usize,
    /// Collectables needed to win.
    pub collection_target: u32,
    /// Milliseconds between steps.
    pub step_interval_ms: u64,
    /// Fixed RNG seed for a reproducible game.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: GRID_SIZE,
            collection_target: COLLECTION_TARGET,
            step_interval_ms: 2000,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, HackerError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, HackerError> {
        let contents = std::fs::read_to_string(path)?;
        GameConfig::from_toml_str(&contents)
    }

    /// Lay `overrides` over these settings, then validate the result.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, HackerError> {
        if let Some(size) = overrides.grid_size {
            self.grid_size = size;
        }
        if let Some(target) = overrides.collection_target {
            self.collection_target = target;
        }
        if let Some(step_ms) = overrides.step_interval_ms {
            self.step_interval_ms = step_ms;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), HackerError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(HackerError::InvalidConfig(format!(
                "grid_size must be at least {}, got {}",
                MIN_GRID_SIZE, self.grid_size
            )));
        }
        if self.collection_target == 0 {
            return Err(HackerError::InvalidConfig(
                "collection_target must be at least 1".to_string(),
            ));
        }
        if self.step_interval_ms < MIN_STEP_INTERVAL_MS {
            return Err(HackerError::InvalidConfig(format!(
                "step_interval_ms must be at least {}, got {}",
                MIN_STEP_INTERVAL_MS, self.step_interval_ms
            )));
        }
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}
