//! Decoder error types.

use thiserror::Error;

/// Terminal decode failures. Each one ends the decode pass; the display
/// string is exactly the line the parser writes to the trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The byte following the escape introducer has no registry entry.
    #[error("unknown escape sequence: {0}")]
    UnknownEscape(u8),

    /// A control byte outside the recognized set (CR, LF, TAB, FF).
    #[error("unknown special character: {0}")]
    UnknownControl(u8),

    /// The stream ended while an escape sequence still expected bytes.
    #[error("unexpected end of stream while decoding {context}")]
    UnexpectedEof { context: &'static str },
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, ParseError>;
