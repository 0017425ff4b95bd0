//! Jot Record - Core value types and rendering for the jot logging core
//!
//! This crate provides the foundational pieces that flow through the logger:
//! - `Severity` - the total order events are filtered by
//! - `ConfiguredLevel` - a per-instance level, possibly the INHERIT sentinel
//! - `LogRecord` - one event, built fresh per call
//! - text-line and JSON-object rendering, quote escaping, timestamps
//!
//! # Design Principles
//!
//! - **Events can never carry INHERIT**: the sentinel lives in its own type,
//!   so the invariant holds by construction rather than by assertion.
//! - **Rendering is pure**: everything process-wide (destinations, the JSON
//!   separator counter, the registry) lives in `jot-logger`, not here.

mod escape;
mod json;
mod record;
mod severity;
mod text;
mod timestamp;

pub use escape::escape_quotes;
pub use json::{JsonRecord, render_json};
pub use record::LogRecord;
pub use severity::{ConfiguredLevel, Severity};
pub use text::{ExtrasLayout, render_body, render_prefix};
pub use timestamp::now_string;

#[cfg(test)]
mod severity_test;
