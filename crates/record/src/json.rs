//! JSON record rendering
//!
//! One JSON object per record. The objects stream as elements of a JSON
//! array whose framing (`[`, `,`, `]`) is managed incrementally by the
//! output layer; this module only knows how to shape a single element.

use serde::Serialize;

use crate::severity::Severity;

/// Wire shape of one JSON record
///
/// Field order is part of the output contract: severity, message, timestamp,
/// then extras only when any were attached.
#[derive(Debug, Serialize)]
pub struct JsonRecord<'a> {
    /// Unpadded severity name
    pub severity: &'a str,

    /// Quote-escaped message
    pub message: &'a str,

    /// Always present; JSON output has no timestamp suppression
    pub timestamp: &'a str,

    /// Quote-escaped extras, omitted entirely when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<&'a [String]>,
}

/// Serialize one record object
///
/// `message` and `extras` are expected to be quote-escaped already; escaping
/// happens once per call and the escaped copies are shared across every
/// destination.
pub fn render_json(
    severity: Severity,
    message: &str,
    timestamp: &str,
    extras: Option<&[String]>,
) -> String {
    let record = JsonRecord {
        severity: severity.as_str(),
        message,
        timestamp,
        extras,
    };
    serde_json::to_string(&record).unwrap_or_default()
}
