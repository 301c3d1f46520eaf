//! Decoder core for ESC/P printer command streams: source/sink traits, the
//! escape sequence registry, and the stream parser producing a readable trace.

pub mod control_codes;

mod errors;
pub use errors::{ParseError, Result};

mod parser;
pub use parser::EscpParser;

mod registry;
pub use registry::{ESCAPE_REGISTRY, EscapeDescriptor, EscapeRegistry, OperandReader, OperandRule};

mod sink;
pub use sink::WriteSink;

mod source;
pub use source::SliceSource;

/// Forward-only cursor over the raw input stream. The parser reads one byte
/// at a time and never rewinds.
pub trait ByteSource {
    /// Next byte of the stream, advancing the cursor. `None` once the stream
    /// is exhausted.
    fn read_byte(&mut self) -> Option<u8>;

    /// True when the cursor sits at the end of the stream.
    fn is_at_end(&self) -> bool;
}

pub trait TraceSink {
    /// Append a fragment to the current trace line.
    fn print(&mut self, text: &str);

    /// End the current trace line.
    fn line_break(&mut self);
}
