//! Text and JSON output sets
//!
//! Two independent collections of writable destinations, each gated by its
//! own enabled flag. Destinations are opaque: write failures are neither
//! detected nor surfaced, and the core owns no retry policy.
//!
//! JSON destinations stream records as elements of a JSON array. Each
//! destination gets its own `[` when it joins and its own `]` when the set
//! is disabled, but the separator counter is shared by the whole set: it
//! counts record writes across every destination, and any destination sees
//! a leading `,` whenever the counter is non-zero. A destination added
//! mid-stream therefore gets a separator before its very first record.

use std::io::Write;

use jot_record::{Severity, now_string, render_json, render_prefix};

/// A writable destination
pub type Destination = Box<dyn Write + Send>;

// =============================================================================
// Text outputs
// =============================================================================

/// Destinations receiving one formatted line per record
pub(crate) struct TextOutputs {
    enabled: bool,
    destinations: Vec<Destination>,
}

impl TextOutputs {
    pub(crate) const fn new() -> Self {
        Self {
            enabled: false,
            destinations: Vec::new(),
        }
    }

    /// Enable text output and register a destination
    pub(crate) fn enable(&mut self, destination: Destination) {
        self.enabled = true;
        self.destinations.push(destination);
    }

    /// Add another destination to an already-enabled set
    pub(crate) fn add(&mut self, destination: Destination) {
        assert!(
            self.enabled,
            "text output must be enabled before destinations are added"
        );
        self.destinations.push(destination);
    }

    /// Drop all destinations with no trailer
    ///
    /// Each destination is left exactly as the last line left it. Safe
    /// no-op when already disabled.
    pub(crate) fn disable(&mut self) {
        self.destinations.clear();
        self.enabled = false;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write one line to every destination
    ///
    /// The body is rendered once by the caller; the timestamp is the only
    /// per-destination piece and is read fresh for each write.
    pub(crate) fn write_line(&mut self, severity: Severity, body: &str, show_timestamp: bool) {
        if !self.enabled {
            return;
        }
        for destination in &mut self.destinations {
            let timestamp = show_timestamp.then(now_string);
            let prefix = render_prefix(severity, timestamp.as_deref());
            let _ = destination.write_all(prefix.as_bytes());
            let _ = destination.write_all(body.as_bytes());
        }
    }
}

// =============================================================================
// JSON outputs
// =============================================================================

/// Destinations receiving an incrementally-streamed JSON array
pub(crate) struct JsonOutputs {
    enabled: bool,
    destinations: Vec<Destination>,
    /// Record writes across ALL destinations since the last (re)enable
    records_emitted: u64,
}

impl JsonOutputs {
    pub(crate) const fn new() -> Self {
        Self {
            enabled: false,
            destinations: Vec::new(),
            records_emitted: 0,
        }
    }

    /// Enable JSON output and register a destination
    ///
    /// Resets the separator counter and opens this destination's array
    /// immediately.
    pub(crate) fn enable(&mut self, mut destination: Destination) {
        self.enabled = true;
        self.records_emitted = 0;
        let _ = destination.write_all(b"[");
        self.destinations.push(destination);
    }

    /// Add another destination to an already-enabled set
    ///
    /// The newcomer opens its own array regardless of when it joined. The
    /// separator counter is NOT reset: if records were already emitted
    /// elsewhere, this destination's first record carries a leading `,`.
    pub(crate) fn add(&mut self, mut destination: Destination) {
        assert!(
            self.enabled,
            "json output must be enabled before destinations are added"
        );
        let _ = destination.write_all(b"[");
        self.destinations.push(destination);
    }

    /// Close every destination's array, then drop them all
    ///
    /// Safe no-op when already disabled (no destinations to close).
    pub(crate) fn disable(&mut self) {
        for destination in &mut self.destinations {
            let _ = destination.write_all(b"]");
        }
        self.destinations.clear();
        self.enabled = false;
        self.records_emitted = 0;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write one record object to every destination
    ///
    /// `message` and `extras` are quote-escaped by the caller, once, and
    /// shared; the timestamp is read fresh per destination. The counter
    /// check-and-increment happens per destination write.
    pub(crate) fn write_record(
        &mut self,
        severity: Severity,
        message: &str,
        extras: Option<&[String]>,
    ) {
        if !self.enabled {
            return;
        }
        for destination in &mut self.destinations {
            if self.records_emitted > 0 {
                let _ = destination.write_all(b",");
            }
            let timestamp = now_string();
            let object = render_json(severity, message, &timestamp, extras);
            let _ = destination.write_all(object.as_bytes());
            self.records_emitted += 1;
        }
    }
}

#[cfg(test)]
#[path = "outputs_test.rs"]
mod outputs_test;
