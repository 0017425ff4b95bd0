//! Shared helpers for tests that touch the process-wide core state

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// Serialize tests on the process-wide state
///
/// The registry, output sets and separator counter are shared by the whole
/// process; tests that touch them must not interleave.
pub(crate) fn state_guard() -> MutexGuard<'static, ()> {
    static GUARD: Mutex<()> = Mutex::new(());
    GUARD.lock()
}

/// A cloneable in-memory destination for byte-level assertions
///
/// The destination handle moves into the output set; keep a clone to read
/// what was written.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("destinations receive utf8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
