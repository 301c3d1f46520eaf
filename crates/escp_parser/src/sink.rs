//! Output-side abstraction: where the rendered trace goes.

use std::io::Write;

use crate::TraceSink;

/// Sink writing the trace to any `io::Write`. The sink is infallible; write
/// errors are dropped.
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TraceSink for WriteSink<W> {
    fn print(&mut self, text: &str) {
        let _ = self.inner.write_all(text.as_bytes());
    }

    fn line_break(&mut self) {
        let _ = self.inner.write_all(b"\n");
    }
}
