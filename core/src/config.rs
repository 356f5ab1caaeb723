use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Spend assumed for a drinking day with no usable amount recorded.
pub const DEFAULT_AMOUNT: f64 = 40.0;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATA_DIR_NAME: &str = ".soberlog";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub default_amount: f64,
    /// Suffix printed after money values.
    pub currency: String,
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_amount: DEFAULT_AMOUNT,
            currency: "$".to_string(),
            data_dir: None,
        }
    }
}

impl Config {
    /// `~/.soberlog`
    pub fn default_data_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home_dir.join(DATA_DIR_NAME))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::default_data_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or returns defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), TrackerError> {
        if !self.default_amount.is_finite() || self.default_amount < 0.0 {
            return Err(TrackerError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("default_amount must be a non-negative number, got {}", self.default_amount),
            });
        }
        Ok(())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_data_dir(),
        }
    }

    pub fn format_money(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.currency)
    }
}
