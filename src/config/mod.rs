//! # Configuration
//!
//! rosterguard reads an optional TOML file. Every section has a default, so an empty
//! file (or no file at all) gives the built-in six-member roster.
//!
//! ```toml
//! [roster]
//! display_names = ["Mohamed Admin", "Ali", "Khaled Admin", "Nour", "Saleh", "Hassen"]
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Precedence for the log filter: `-v` flags > `RUST_LOG` > `logging.level`
//! (see [`LoggingConfig::filter`]).

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::roster::{Roster, DEFAULT_DISPLAY_NAMES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub display_names: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            display_names: DEFAULT_DISPLAY_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Resolve the effective log filter from the `-v` count and the `RUST_LOG` value.
    pub fn filter(&self, verbose: u8, rust_log: Option<&str>) -> String {
        match (verbose, rust_log) {
            (0, Some(env)) if !env.trim().is_empty() => env.to_string(),
            (0, _) => self.level.clone(),
            (1, _) => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".to_string() }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load the file if it exists; `None` means the caller should use defaults
    pub async fn load_if_present(path: &str) -> Result<Option<Self>> {
        if Path::new(path).exists() {
            Self::load(path).await.map(Some)
        } else {
            Ok(None)
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content).await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Build the roster described by this configuration
    pub fn build_roster(&self) -> Result<Roster> {
        Roster::from_display_names(&self.roster.display_names)
            .map_err(|e| anyhow!("Invalid roster configuration: {}", e))
    }
}
