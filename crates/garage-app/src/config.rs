//! Configuration management for garage-ledger
//!
//! Config stored at: ~/.config/garage-ledger/config.json

use std::path::{Path, PathBuf};

use garage_types::{ConfigError, OutputFormat, Result, MAX_CAPACITY};
use serde::{Deserialize, Serialize};

/// Largest lane a config may ask for
pub const CAPACITY_LIMIT: usize = 1000;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of spaces in the lane
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Print the move-by-move plan after each departure
    #[serde(default = "default_true")]
    pub show_moves: bool,

    /// Seed for random plates; unseeded when absent
    #[serde(default)]
    pub plate_seed: Option<u64>,
}

fn default_capacity() -> usize {
    MAX_CAPACITY
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            output_format: OutputFormat::default(),
            show_moves: true,
            plate_seed: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("garage-ledger");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `path` without range checks, so a bad value can be edited
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.capacity == 0 || self.capacity > CAPACITY_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "capacity must be between 1 and {}, got {}",
                CAPACITY_LIMIT, self.capacity
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Garage Ledger Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Capacity:       {}", self.capacity)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Show moves:     {}", self.show_moves)?;
        writeln!(
            f,
            "Plate seed:     {}",
            self.plate_seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
