//! Process-wide core state and the output control surface
//!
//! Everything mutable and process-wide - the registry, both output sets and
//! the installed configuration - lives in one struct behind a single mutex.
//! Registration, resolution and dispatch see the shared state whole or not
//! at all, from any thread.

use std::io::Write;

use jot_config::Config;
use parking_lot::{Mutex, MutexGuard};

use crate::outputs::{JsonOutputs, TextOutputs};
use crate::registry::Registry;

/// The one process-wide state object
pub(crate) struct CoreState {
    /// Installed startup configuration; defaults apply until `init` is called
    config: Option<Config>,
    pub(crate) registry: Registry,
    pub(crate) text: TextOutputs,
    pub(crate) json: JsonOutputs,
}

impl CoreState {
    const fn new() -> Self {
        Self {
            config: None,
            registry: Registry::new(),
            text: TextOutputs::new(),
            json: JsonOutputs::new(),
        }
    }

    /// The effective configuration
    pub(crate) fn config(&self) -> Config {
        self.config.clone().unwrap_or_default()
    }

    /// Disable every output at once
    ///
    /// Text destinations are dropped with no trailer; every enabled JSON
    /// destination gets its closing `]` first.
    pub(crate) fn close_outputs(&mut self) {
        if self.text.is_enabled() {
            self.text.disable();
        }
        if self.json.is_enabled() {
            self.json.disable();
        }
    }
}

static CORE: Mutex<CoreState> = Mutex::new(CoreState::new());

/// Lock the process-wide state
pub(crate) fn core() -> MutexGuard<'static, CoreState> {
    CORE.lock()
}

// =============================================================================
// Public control surface
// =============================================================================

/// Install the startup configuration
///
/// Never required - defaults apply until this is called. Affects subsequent
/// calls only.
pub fn init(config: Config) {
    core().config = Some(config);
}

/// Enable text output and register the first destination
pub fn enable_text_output(destination: impl Write + Send + 'static) {
    core().text.enable(Box::new(destination));
}

/// Add another text destination
///
/// Panics unless text output is already enabled.
pub fn add_text_output(destination: impl Write + Send + 'static) {
    core().text.add(Box::new(destination));
}

/// Disable text output, dropping all destinations with no trailer
pub fn disable_text_output() {
    core().text.disable();
}

/// Whether text output is currently enabled
pub fn is_text_output_enabled() -> bool {
    core().text.is_enabled()
}

/// Enable JSON output and register the first destination
///
/// Writes the array opener `[` to the destination immediately and resets
/// the record separator counter.
pub fn enable_json_output(destination: impl Write + Send + 'static) {
    core().json.enable(Box::new(destination));
}

/// Add another JSON destination
///
/// Panics unless JSON output is already enabled. The destination gets its
/// own `[` immediately; see [`Destination`](crate::Destination) docs for
/// the shared-separator consequence of joining mid-stream.
pub fn add_json_output(destination: impl Write + Send + 'static) {
    core().json.add(Box::new(destination));
}

/// Disable JSON output, closing every destination's array with `]`
pub fn disable_json_output() {
    core().json.disable();
}

/// Whether JSON output is currently enabled
pub fn is_json_output_enabled() -> bool {
    core().json.is_enabled()
}

/// Disable every output at once
///
/// This is the teardown every [`Logger`](crate::Logger) drop performs; it
/// is also callable directly.
pub fn close_all_outputs() {
    core().close_outputs();
}

/// Pre-size the logger registry
///
/// Panics unless `capacity` exceeds the number of loggers ever constructed.
pub fn reserve_logger_capacity(capacity: usize) {
    core().registry.reserve(capacity);
}
