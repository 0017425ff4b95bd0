//! The Logger handle
//!
//! Construction registers the instance into the process-wide registry and
//! binds the handle to its slot for its lifetime. Two contracts here
//! surprise people:
//!
//! - The effective threshold for EVERY instance is resolved from the most
//!   recently constructed live logger backward, regardless of which
//!   instance is logging.
//! - Dropping ANY logger disables every output in the process. Outputs are
//!   process-wide state, not per-instance state, and teardown follows the
//!   same rule.

use jot_record::{ConfiguredLevel, LogRecord, Severity, escape_quotes, render_body};

use crate::state::core;

/// A logger instance bound into the process-wide hierarchy
#[derive(Debug)]
pub struct Logger {
    /// Stable index of this instance's registry slot
    slot: usize,
}

impl Logger {
    /// Construct a logger that defers to the resolution walk
    pub fn new() -> Self {
        Self::register(ConfiguredLevel::Inherit)
    }

    /// Construct a logger with an explicit severity threshold
    pub fn with_level(severity: Severity) -> Self {
        Self::register(ConfiguredLevel::Explicit(severity))
    }

    fn register(level: ConfiguredLevel) -> Self {
        let slot = core().registry.register(level);
        Self { slot }
    }

    /// The threshold this instance would filter by right now
    ///
    /// Resolved per call; nothing is cached. Constructing or dropping any
    /// logger anywhere in the process can change the answer.
    pub fn effective_level(&self) -> Severity {
        let core = core();
        core.registry.resolve(core.config().default_severity())
    }

    /// Log one record to every enabled destination
    ///
    /// Returns immediately, without formatting anything, when the record's
    /// severity is below the effective threshold. Never fails: destination
    /// write errors are not detected or surfaced.
    pub fn log(&self, record: LogRecord) {
        let mut core = core();

        let threshold = core.registry.resolve(core.config().default_severity());
        if record.severity < threshold {
            return;
        }

        if core.text.is_enabled() {
            let body = render_body(&record, core.config().extras);
            core.text
                .write_line(record.severity, &body, record.show_timestamp);
        }

        if core.json.is_enabled() {
            // Escaped once here, shared across every JSON destination.
            let message = escape_quotes(&record.message);
            let extras: Vec<String> = record
                .extras
                .iter()
                .map(|extra| escape_quotes(extra).into_owned())
                .collect();
            let extras = (!extras.is_empty()).then_some(extras);
            core.json
                .write_record(record.severity, &message, extras.as_deref());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    /// Tombstones this instance's slot, then disables ALL process-wide
    /// output state if any is enabled - closing the JSON array on every
    /// enabled JSON destination
    fn drop(&mut self) {
        let mut core = core();
        core.registry.retire(self.slot);
        core.close_outputs();
    }
}

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;
