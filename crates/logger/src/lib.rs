//! Jot - a tiny embeddable logging core
//!
//! Filters events by severity, resolves the effective threshold through a
//! process-wide hierarchy of logger instances, and fans events out to any
//! number of text and JSON destinations. Everything is synchronous and
//! in-process; rotation, buffered delivery and transport belong to the
//! host.
//!
//! # Architecture
//!
//! ```text
//! [call site] --LogRecord--> [Logger] --resolve--> [Registry]
//!                               |--render once--> [Text destinations]
//!                               `--escape once--> [JSON destinations]
//! ```
//!
//! # Example
//!
//! ```
//! use jot_logger::{Logger, LogRecord, Severity, enable_text_output};
//!
//! let logger = Logger::with_level(Severity::Info);
//! enable_text_output(std::io::stdout());
//! logger.log(LogRecord::new(Severity::Warn, "cache miss rate high"));
//! ```
//!
//! # The two contracts worth reading twice
//!
//! - **Most recent wins.** An instance constructed with no explicit level
//!   inherits from the resolution walk, and the walk always starts at the
//!   most recently constructed live logger in the whole process - not at
//!   the instance being logged on.
//! - **Any drop tears everything down.** Destinations are process-wide
//!   state; when any `Logger` goes out of scope, every output is disabled
//!   and every open JSON array is closed.

mod logger;
mod macros;
mod outputs;
mod registry;
mod state;

pub use logger::Logger;
pub use outputs::Destination;
pub use state::{
    add_json_output, add_text_output, close_all_outputs, disable_json_output,
    disable_text_output, enable_json_output, enable_text_output, init, is_json_output_enabled,
    is_text_output_enabled, reserve_logger_capacity,
};

// Re-export the types callers build records and configuration with
pub use jot_config::Config;
pub use jot_record::{ConfiguredLevel, ExtrasLayout, LogRecord, Severity};

/// Current version of the logging core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Shared helpers for tests that touch the process-wide state
#[cfg(test)]
pub(crate) mod test_util;
