use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MindfulError, Result};
use crate::scheduler::REVIEW_INTERVALS;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for mindful, stored in config.json beside the note store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MindfulConfig {
    /// Review spacing in days, ascending. Positions past the table reuse the
    /// last entry.
    #[serde(default = "default_intervals")]
    pub intervals: Vec<u32>,
}

fn default_intervals() -> Vec<u32> {
    REVIEW_INTERVALS.to_vec()
}

impl Default for MindfulConfig {
    fn default() -> Self {
        Self {
            intervals: default_intervals(),
        }
    }
}

impl MindfulConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MindfulError::Io)?;
        let config: MindfulConfig =
            serde_json::from_str(&content).map_err(MindfulError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MindfulError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MindfulError::Serialization)?;
        fs::write(config_path, content).map_err(MindfulError::Io)?;
        Ok(())
    }

    /// The scheduler assumes a non-empty ascending table of positive day
    /// counts; reject anything else before it gets that far.
    pub fn validate(&self) -> Result<()> {
        if self.intervals.is_empty() {
            return Err(MindfulError::Config(
                "Interval table must not be empty".to_string(),
            ));
        }
        if self.intervals.contains(&0) {
            return Err(MindfulError::Config(
                "Intervals must be positive day counts".to_string(),
            ));
        }
        if self.intervals.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(MindfulError::Config(
                "Intervals must be strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}
