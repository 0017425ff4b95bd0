//! One log event, built fresh per call

use crate::severity::Severity;

/// A single log event
///
/// Constructed per `log` call and never persisted. Everything beyond the
/// severity and message is optional and attached with builder methods.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Severity of this event (always concrete, never INHERIT)
    pub severity: Severity,

    /// Message text
    pub message: String,

    /// Supplementary strings, in attachment order (possibly empty)
    pub extras: Vec<String>,

    /// Source file path, when the call site captured one
    pub file: Option<String>,

    /// Source line number, when the call site captured one
    pub line: Option<u32>,

    /// Whether text output includes a timestamp (JSON output always does)
    pub show_timestamp: bool,
}

impl LogRecord {
    /// Create a record with just a severity and message
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            extras: Vec::new(),
            file: None,
            line: None,
            show_timestamp: true,
        }
    }

    /// Attach one extra
    #[must_use]
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    /// Attach several extras, preserving their order
    #[must_use]
    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }

    /// Attach both halves of a source location
    #[must_use]
    pub fn with_location(self, file: impl Into<String>, line: u32) -> Self {
        self.with_file(file).with_line(line)
    }

    /// Attach a source file path only
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a source line number only
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Suppress the timestamp in text output
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.show_timestamp = false;
        self
    }

    /// Whether any part of a source location is attached
    #[inline]
    pub fn has_location(&self) -> bool {
        self.file.is_some() || self.line.is_some()
    }
}
