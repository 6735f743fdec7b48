//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.partition-checker.toml` in current directory
//! 4. `~/.config/partition-checker/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [files]
//! input = "result.txt"
//! analysis = "partition_analysis.txt"
//! sql = "partition_fix.sql"
//!
//! [sql]
//! engine = "InnoDB"
//! timezone = "local"           # local, utc
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `PARTITION_CHECKER_INPUT` | Partition listing path |
//! | `PARTITION_CHECKER_TIMEZONE` | `local` or `utc` |
//! | `PARTITION_CHECKER_ENGINE` | Storage engine name |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Default partition listing
pub const DEFAULT_INPUT: &str = "result.txt";
/// Default analysis report
pub const DEFAULT_ANALYSIS_OUTPUT: &str = "partition_analysis.txt";
/// Default SQL script
pub const DEFAULT_SQL_OUTPUT: &str = "partition_fix.sql";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub sql:   SqlConfig
}

/// Input and output file locations
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_input")]
    pub input:    PathBuf,
    #[serde(default = "default_analysis")]
    pub analysis: PathBuf,
    #[serde(default = "default_sql")]
    pub sql:      PathBuf
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_analysis() -> PathBuf {
    PathBuf::from(DEFAULT_ANALYSIS_OUTPUT)
}

fn default_sql() -> PathBuf {
    PathBuf::from(DEFAULT_SQL_OUTPUT)
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input:    default_input(),
            analysis: default_analysis(),
            sql:      default_sql()
        }
    }
}

/// Generated SQL settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SqlConfig {
    /// Storage engine; `InnoDB` when unset
    pub engine:   Option<String>,
    /// `local` or `utc`; `local` when unset
    pub timezone: Option<String>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.partition-checker.toml)
    /// 3. Config file in home directory
    ///    (~/.config/partition-checker/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("partition-checker")
                .join("config.toml");
            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(".partition-checker.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        if let Some(input) = env::var_os("PARTITION_CHECKER_INPUT") {
            config.files.input = PathBuf::from(input);
        }

        if let Ok(timezone) = env::var("PARTITION_CHECKER_TIMEZONE") {
            config.sql.timezone = Some(timezone);
        }

        if let Ok(engine) = env::var("PARTITION_CHECKER_ENGINE") {
            config.sql.engine = Some(engine);
        }

        Ok(config)
    }

    /// Read a single TOML configuration file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
