//! Diagnostics sink for the editor
//!
//! The editor reports error-severity diagnostics through a sink supplied at
//! construction instead of mutating any process-wide logger state. The CLI
//! wires the sink to stderr; tests wire it to a buffer.

use std::io::{self, Write};
use std::sync::Mutex;

/// Receives error-severity diagnostics emitted by the editor
pub trait EditorLog: Send + Sync {
    fn error(&self, message: &str);
}

/// Writes diagnostics as single prefixed lines to an owned stream
pub struct StreamLog<W: Write + Send> {
    stream: Mutex<W>,
}

impl<W: Write + Send> StreamLog<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream: Mutex::new(stream),
        }
    }
}

impl StreamLog<io::Stderr> {
    /// Sink used by the CLI: diagnostics go to the process error stream
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> EditorLog for StreamLog<W> {
    fn error(&self, message: &str) {
        // A poisoned or failed stream drops the diagnostic; the update error
        // itself still propagates to the caller.
        if let Ok(mut stream) = self.stream.lock() {
            let _ = writeln!(stream, "editor: {}", message);
        }
    }
}
