//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_the_path() {
        let err = ConfigError::Io {
            path: "jot.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("jot.toml"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_parse_error_wraps_toml() {
        let toml_err = toml::from_str::<toml::Value>("not { valid").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().contains("failed to parse config"));
    }
}
