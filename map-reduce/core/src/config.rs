use crate::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Slots in the mapper -> collector conduit. Mappers block once it is full.
    #[serde(default = "default_emission_buffer")]
    pub emission_buffer: usize,
    /// Maximum live mapper tasks (0 = one task per record, no cap)
    #[serde(default)]
    pub max_map_tasks: usize,
    /// Maximum live reducer tasks (0 = one task per key, no cap)
    #[serde(default)]
    pub max_reduce_tasks: usize,
    /// Number of entries shown when results are ranked
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_emission_buffer() -> usize {
    64
}

fn default_top_n() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emission_buffer: default_emission_buffer(),
            max_map_tasks: 0,
            max_reduce_tasks: 0,
            top_n: default_top_n(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.emission_buffer == 0 {
            return Err(ConfigError::Invalid(
                "emission_buffer must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn log_summary(&self) {
        info!(
            emission_buffer = self.emission_buffer,
            max_map_tasks = self.max_map_tasks,
            max_reduce_tasks = self.max_reduce_tasks,
            top_n = self.top_n,
            "configuration loaded"
        );
    }
}
