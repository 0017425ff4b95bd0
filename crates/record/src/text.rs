//! Text line rendering
//!
//! One line per record:
//!
//! ```text
//! [ERROR] 2025-01-15T10:30:45.123Z - src/io.rs (line 10) - boom - EXTRAS -  x=1 ;
//! ```
//!
//! The timestamp is the only per-destination piece (each destination gets a
//! fresh wall-clock reading), so the line is rendered in two parts: a prefix
//! carrying the bracketed severity and optional timestamp, and a body with
//! everything else, built once per call.

use std::fmt::Write;

use serde::Deserialize;

use crate::record::LogRecord;
use crate::severity::Severity;

/// How extras render in text output
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtrasLayout {
    /// All extras appended to the record's own line (default)
    #[default]
    Inline,
    /// One indented line per extra
    Separate,
}

/// Indentation for separate-line extras: the padded name width plus the
/// bracket pair and the following space, so extras line up under the message.
const EXTRAS_INDENT: usize = Severity::PADDED_WIDTH + 3;

/// Render the line prefix: bracketed padded severity, then the timestamp
/// when one is given
pub fn render_prefix(severity: Severity, timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => format!("[{}] {} - ", severity.padded_str(), ts),
        None => format!("[{}] ", severity.padded_str()),
    }
}

/// Render everything after the prefix: location, message, extras, trailing
/// newline
pub fn render_body(record: &LogRecord, layout: ExtrasLayout) -> String {
    let mut body = String::with_capacity(record.message.len() + 32);

    if let Some(file) = &record.file {
        let _ = write!(body, "{} ", file);
    }
    if let Some(line) = record.line {
        let _ = write!(body, "(line {}) ", line);
    }
    if record.has_location() {
        body.push_str("- ");
    }

    body.push_str(&record.message);

    if !record.extras.is_empty() {
        body.push_str(" - EXTRAS ");
        match layout {
            ExtrasLayout::Inline => {
                body.push_str("- ");
                for extra in &record.extras {
                    let _ = write!(body, " {} ;", extra);
                }
            }
            ExtrasLayout::Separate => {
                body.push(':');
                for extra in &record.extras {
                    let _ = write!(body, "\n{:indent$}- {} ;", "", extra, indent = EXTRAS_INDENT);
                }
            }
        }
    }

    body.push('\n');
    body
}
