//! Severity levels and the per-instance configured level
//!
//! `Severity` is the closed set of levels an event can carry. The INHERIT
//! sentinel is not one of them: it only makes sense as a per-logger
//! configuration value, so it lives in `ConfiguredLevel` instead.

use serde::Deserialize;

/// Log severity levels, least to most severe
///
/// The derived ordering is the filtering order: an event passes a threshold
/// when its severity is at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Width the padded name is brought up to
    pub const PADDED_WIDTH: usize = 5;

    /// Get the canonical uppercase name
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Get the name right-padded with spaces to exactly 5 characters
    #[inline]
    pub const fn padded_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-logger configured level
///
/// Either an explicit severity threshold or `Inherit`, meaning "no opinion;
/// defer to the resolution walk". Never appears on an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfiguredLevel {
    /// Defer to the resolution walk (default)
    #[default]
    Inherit,
    /// A fixed severity threshold for this instance
    Explicit(Severity),
}

impl ConfiguredLevel {
    /// Get the canonical uppercase name
    ///
    /// `INHERIT` is never padded; it is a configuration value and is never
    /// rendered into a log line.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inherit => "INHERIT",
            Self::Explicit(severity) => severity.as_str(),
        }
    }

    /// The explicit severity, if one is set
    #[inline]
    pub const fn explicit(self) -> Option<Severity> {
        match self {
            Self::Inherit => None,
            Self::Explicit(severity) => Some(severity),
        }
    }
}

impl From<Severity> for ConfiguredLevel {
    fn from(severity: Severity) -> Self {
        Self::Explicit(severity)
    }
}

impl std::fmt::Display for ConfiguredLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
