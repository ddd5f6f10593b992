//! Configuration system for yql.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags and the `YQL_FILE` environment variable.
//!
//! # Example
//!
//! ```
//! use yql::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(!config.quiet);
//! assert_eq!(config.log_level, "warn");
//!
//! // Create custom configuration
//! let custom = Config {
//!     create_backup: true,
//!     ..Config::default()
//! };
//! assert!(custom.create_backup);
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the data file when `-f` is not given.
pub const FILE_ENV_VAR: &str = "YQL_FILE";

/// Configuration for yql.
///
/// # Fields
///
/// * `quiet` - Suppress diagnostics on stderr (default: false)
/// * `create_backup` - Copy the data file to `.bak` before `set` rewrites it (default: false)
/// * `file` - Data file used when neither `-f` nor `YQL_FILE` is given (default: none)
/// * `log_level` - Default tracing filter when `-v` is not given (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Suppress diagnostics
    #[serde(default)]
    pub quiet: bool,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Fallback data file
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: false,
            create_backup: false,
            file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yql/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yql");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields the default configuration. A file that exists
    /// but cannot be read or parsed is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Picks the data file: explicit flag, then `YQL_FILE`, then the config file.
    ///
    /// Empty values are treated as unset.
    pub fn resolve_data_file(
        &self,
        flag: Option<PathBuf>,
        env_value: Option<OsString>,
    ) -> Result<PathBuf> {
        if let Some(path) = flag.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path);
        }
        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(value));
        }
        if let Some(path) = self.file.clone().filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path);
        }
        bail!("no data file given (use -f or set {})", FILE_ENV_VAR)
    }
}
