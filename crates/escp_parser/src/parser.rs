//! ESC/P stream parser: walks a raw printer byte stream and renders it as a
//! line-oriented human-readable trace.
//!
//! Each byte is classified as printable text, a named control character, or
//! the escape introducer. Printable runs accumulate on one trace line;
//! control characters append their name and end the line; escape sequences
//! are decoded through the registry and rendered one line per sequence.
//! Unknown opcodes and unrecognized control bytes are terminal: the error is
//! written as the final trace line and the pass stops without consuming
//! further input.

use crate::{ByteSource, ESCAPE_REGISTRY, OperandRule, ParseError, Result, TraceSink, control_codes, registry::read_operand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// At a token boundary; the next token starts a fresh trace line.
    Boundary,
    /// Inside a run of printable characters on the current trace line.
    LiteralRun,
    /// The cursor reached the end of the stream.
    EndOfStream,
    /// A terminal error stopped the pass.
    Failed,
}

pub struct EscpParser {
    state: ParseState,
}

impl EscpParser {
    pub fn new() -> Self {
        Self { state: ParseState::Boundary }
    }

    /// True once a pass ended on a terminal error.
    pub fn is_failed(&self) -> bool {
        self.state == ParseState::Failed
    }

    /// Decode the whole stream, rendering the trace into `sink`.
    ///
    /// Returns `Ok(())` when the pass ends at end-of-stream, after emitting
    /// the final `EOF` line. On a terminal error the pass stops at the
    /// offending byte and returns it; the error description has already been
    /// written to the sink as the last trace line.
    pub fn parse(&mut self, source: &mut dyn ByteSource, sink: &mut dyn TraceSink) -> Result<()> {
        self.state = ParseState::Boundary;

        while !source.is_at_end() {
            let Some(byte) = source.read_byte() else {
                break;
            };

            if byte == control_codes::ESC {
                self.parse_escape(source, sink)?;
                continue;
            }

            if let Some(name) = control_name(byte) {
                // Control names append to the current line, then end it.
                sink.print(name);
                sink.line_break();
                self.state = ParseState::Boundary;
                continue;
            }

            if is_control(byte) {
                sink.line_break();
                return Err(self.fail(sink, ParseError::UnknownControl(byte)));
            }

            let mut buf = [0u8; 4];
            sink.print((byte as char).encode_utf8(&mut buf));
            self.state = ParseState::LiteralRun;
        }

        self.state = ParseState::EndOfStream;
        sink.print("EOF");
        sink.line_break();
        Ok(())
    }

    /// Decode one escape sequence; the introducer byte is already consumed.
    fn parse_escape(&mut self, source: &mut dyn ByteSource, sink: &mut dyn TraceSink) -> Result<()> {
        if self.state == ParseState::LiteralRun {
            sink.line_break();
        }
        self.state = ParseState::Boundary;

        let Some(opcode) = source.read_byte() else {
            return Err(self.fail(sink, ParseError::UnexpectedEof { context: "escape opcode" }));
        };
        let Some(descriptor) = ESCAPE_REGISTRY.lookup(opcode) else {
            return Err(self.fail(sink, ParseError::UnknownEscape(opcode)));
        };

        sink.print(descriptor.name);
        let decoded = match descriptor.rule {
            OperandRule::Fixed(count) => read_fixed_operands(count, descriptor.name, source, sink),
            OperandRule::Custom(reader) => reader(source, sink),
        };
        sink.line_break();
        decoded.map_err(|error| self.fail(sink, error))
    }

    /// Terminal error: record it and render it as the final trace line.
    fn fail(&mut self, sink: &mut dyn TraceSink, error: ParseError) -> ParseError {
        self.state = ParseState::Failed;
        log::debug!("decode pass stopped: {error}");
        sink.print(&error.to_string());
        sink.line_break();
        error
    }
}

impl Default for EscpParser {
    fn default() -> Self {
        Self::new()
    }
}

fn read_fixed_operands(count: u8, name: &'static str, source: &mut dyn ByteSource, sink: &mut dyn TraceSink) -> Result<()> {
    for _ in 0..count {
        let value = read_operand(source, name)?;
        sink.print(&format!(" {value}"));
    }
    Ok(())
}

/// Control bytes with a trace name; any other control byte ends the pass.
fn control_name(byte: u8) -> Option<&'static str> {
    match byte {
        control_codes::CARRIAGE_RETURN => Some("CR"),
        control_codes::LINE_FEED => Some("LF"),
        control_codes::TAB => Some("horizontal tab"),
        control_codes::FORM_FEED => Some("form feed"),
        _ => None,
    }
}

/// C0 and C1 control ranges; everything else renders as a Latin-1 character.
fn is_control(byte: u8) -> bool {
    byte < 0x20 || (0x7F..=0x9F).contains(&byte)
}
