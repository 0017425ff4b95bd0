//! Logger registry - the process-wide hierarchy
//!
//! An append-only arena of slots, one per `Logger` ever constructed, in
//! construction order. A dropped logger's slot is tombstoned, never removed
//! or reused, so indices stay stable and the sequence grows for the life of
//! the process.
//!
//! Threshold resolution walks backward from the most recently registered
//! live slot: "most recent wins", not "innermost scope wins". A caller
//! logging on an older instance still gets the threshold implied by the
//! newest live one.

use jot_record::{ConfiguredLevel, Severity};

/// One registered logger instance
#[derive(Debug, Clone, Copy)]
struct Slot {
    level: ConfiguredLevel,
    alive: bool,
}

/// Append-only registry of every logger instance
#[derive(Debug)]
pub(crate) struct Registry {
    slots: Vec<Slot>,
}

impl Registry {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append a live slot; returns its stable index
    pub(crate) fn register(&mut self, level: ConfiguredLevel) -> usize {
        self.slots.push(Slot { level, alive: true });
        self.slots.len() - 1
    }

    /// Tombstone a slot. The entry stays and the index is never reused.
    pub(crate) fn retire(&mut self, index: usize) {
        self.slots[index].alive = false;
    }

    /// Number of slots ever registered, tombstones included
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Resolve the effective threshold
    ///
    /// Scans live slots from the most recently registered and returns the
    /// first explicit level; `default` when every live slot inherits.
    /// At least one live slot must exist - every caller holds a live
    /// `Logger`, so an empty walk means the enable/registration contract
    /// was broken.
    pub(crate) fn resolve(&self, default: Severity) -> Severity {
        let mut live = self.slots.iter().rev().filter(|slot| slot.alive).peekable();
        assert!(
            live.peek().is_some(),
            "level resolution requires at least one live logger"
        );
        for slot in live {
            if let Some(severity) = slot.level.explicit() {
                return severity;
            }
        }
        default
    }

    /// Pre-size the arena
    ///
    /// `capacity` must exceed the number of loggers ever constructed.
    pub(crate) fn reserve(&mut self, capacity: usize) {
        assert!(
            capacity > self.slots.len(),
            "reserve capacity must exceed the current logger count"
        );
        self.slots.reserve(capacity - self.slots.len());
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
