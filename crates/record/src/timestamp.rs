//! Wall-clock timestamp provider

use chrono::Utc;

/// Timestamp shape written into both text and JSON output
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format the current wall-clock time (UTC, millisecond precision)
///
/// Computed on demand; dispatch takes a fresh one per destination.
pub fn now_string() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
