use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Append-only byte sink shared between the encoder and the host.
///
/// The codec writer owns one handle and appends finished Ogg pages as they are
/// produced; the host keeps another handle and collects the bytes whenever it
/// likes, typically after the last segment. Cloning is cheap and all clones
/// see the same bytes.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl OutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take everything accumulated so far, leaving the sink empty.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }

    /// Copy of the accumulated bytes without consuming them.
    pub fn snapshot(&self) -> Vec<u8> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        // Single-threaded use per the session model; poisoning cannot happen
        // without a panic on this same thread.
        self.bytes.lock().expect("output sink lock poisoned")
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
