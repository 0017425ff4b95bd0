//! Jot Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! An empty config is a valid config - only specify what you need to change.
//!
//! These fields replace what used to be build-time switches: the fallback
//! severity for each build profile and the text layout for extras. The
//! debug/release choice itself stays compiled in; only the values are
//! configurable.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use jot_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("debug_level = \"debug\"").unwrap();
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! debug_level = "info"
//! release_level = "warn"
//! extras = "inline"
//! ```

mod error;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use jot_record::{ExtrasLayout, Severity};

pub use error::{ConfigError, Result};

/// Logging core configuration
///
/// All fields are optional with documented defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Fallback severity when every live logger inherits, debug builds
    /// Default: info
    pub debug_level: Severity,

    /// Fallback severity when every live logger inherits, release builds
    /// Default: warn
    pub release_level: Severity,

    /// How extras render in text output (inline, separate)
    /// Default: inline
    pub extras: ExtrasLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_level: Severity::Info,
            release_level: Severity::Warn,
            extras: ExtrasLayout::Inline,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// The fallback severity for this build profile
    ///
    /// Selected once per build via `debug_assertions`, not per call.
    pub fn default_severity(&self) -> Severity {
        if cfg!(debug_assertions) {
            self.debug_level
        } else {
            self.release_level
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
