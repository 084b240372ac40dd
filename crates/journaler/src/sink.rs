//! In-memory sink

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable in-memory byte sink
///
/// Every clone appends to the same buffer, so a test can hand one clone to a
/// `Journal` and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without their newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let mut writer = sink.clone();
        writer.write_all(b"first\nsecond\n").unwrap();

        assert_eq!(sink.contents(), "first\nsecond\n");
        assert_eq!(sink.lines(), vec!["first", "second"]);

        sink.clear();
        assert!(writer.is_empty());
    }
}
