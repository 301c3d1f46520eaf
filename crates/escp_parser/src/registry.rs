//! Escape sequence registry for the ESC/P printer protocol.
//!
//! Every command starts with the introducer byte 0x1B followed by a one-byte
//! opcode; operands, where present, follow as raw bytes.
//!
//! ## Supported Commands
//!
//! - `ESC @` - initialize
//! - `ESC P` - select 10 cpi
//! - `ESC <` - unidirectional line
//! - `ESC U <n>` - unidirectional mode
//! - `ESC + <n>` - set n/360-inch line spacing
//! - `ESC l <n>` - left margin
//! - `ESC Q <n>` - right margin
//! - `ESC J <n>` - n/180 inch line feed
//! - `ESC x <n>` - letter quality mode
//! - `ESC D <t1> .. <tk> 0x00` - set horizontal tabs (zero-terminated list)
//! - `ESC $ <n1> <n2>` - set absolute position (n1 + 256*n2)
//! - `ESC * <m> <n1> <n2> <data>` - graphics mode: m = density, n1 + 256*n2
//!   columns, three data bytes per column

use crate::{ByteSource, ParseError, Result, TraceSink};

// Names shared between the registry entries and the error context of their
// operand readers.
const HORIZONTAL_TABS: &str = "set horizontal tabs";
const ABSOLUTE_POSITION: &str = "set absolute position";
const GRAPHICS_MODE: &str = "graphics mode";

/// Reader for sequences with their own operand sub-format. Writes the decoded
/// operands to the sink and leaves the cursor past the last consumed byte.
pub type OperandReader = fn(&mut dyn ByteSource, &mut dyn TraceSink) -> Result<()>;

/// How the operand bytes of an escape sequence are decoded.
#[derive(Clone, Copy)]
pub enum OperandRule {
    /// Read exactly N bytes, each rendered as an unsigned decimal value.
    Fixed(u8),
    /// Sequence-specific reader deciding how many bytes to consume.
    Custom(OperandReader),
}

/// A single registry entry: display name plus operand decoding rule.
#[derive(Clone, Copy)]
pub struct EscapeDescriptor {
    pub name: &'static str,
    pub rule: OperandRule,
}

fn build_registry() -> Vec<Option<EscapeDescriptor>> {
    let mut entries = vec![None; 256];
    entries[0x40] = Some(EscapeDescriptor { name: "initialize", rule: OperandRule::Fixed(0) });
    entries[0x50] = Some(EscapeDescriptor { name: "select 10 cpi", rule: OperandRule::Fixed(0) });
    entries[0x3C] = Some(EscapeDescriptor { name: "unidirectional line", rule: OperandRule::Fixed(0) });
    entries[0x55] = Some(EscapeDescriptor { name: "unidirectional", rule: OperandRule::Fixed(1) });
    entries[0x2B] = Some(EscapeDescriptor { name: "set n/360-inch line spacing", rule: OperandRule::Fixed(1) });
    entries[0x6C] = Some(EscapeDescriptor { name: "left margin", rule: OperandRule::Fixed(1) });
    entries[0x51] = Some(EscapeDescriptor { name: "right margin", rule: OperandRule::Fixed(1) });
    entries[0x4A] = Some(EscapeDescriptor { name: "n/180 inch line feed", rule: OperandRule::Fixed(1) });
    entries[0x78] = Some(EscapeDescriptor { name: "letter quality mode", rule: OperandRule::Fixed(1) });
    entries[0x44] = Some(EscapeDescriptor { name: HORIZONTAL_TABS, rule: OperandRule::Custom(read_horizontal_tabs) });
    entries[0x24] = Some(EscapeDescriptor { name: ABSOLUTE_POSITION, rule: OperandRule::Custom(read_absolute_position) });
    entries[0x2A] = Some(EscapeDescriptor { name: GRAPHICS_MODE, rule: OperandRule::Custom(read_graphics_mode) });
    entries
}

lazy_static::lazy_static! {
    /// Process-wide registry, built on first use and immutable afterwards.
    pub static ref ESCAPE_REGISTRY: EscapeRegistry = EscapeRegistry::new();
}

/// Opcode-indexed table of escape sequence descriptors.
pub struct EscapeRegistry {
    entries: Vec<Option<EscapeDescriptor>>,
}

impl EscapeRegistry {
    /// Build the fixed ESC/P command set.
    pub fn new() -> Self {
        Self { entries: build_registry() }
    }

    /// Descriptor for `opcode`, if the protocol defines one.
    pub fn lookup(&self, opcode: u8) -> Option<&EscapeDescriptor> {
        self.entries[opcode as usize].as_ref()
    }
}

impl Default for EscapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One operand byte, or the truncation error naming what was being decoded.
pub(crate) fn read_operand(source: &mut dyn ByteSource, context: &'static str) -> Result<u8> {
    source.read_byte().ok_or(ParseError::UnexpectedEof { context })
}

fn read_horizontal_tabs(source: &mut dyn ByteSource, sink: &mut dyn TraceSink) -> Result<()> {
    // Tab stops are a zero-terminated list; the terminator is consumed but
    // not printed.
    loop {
        let stop = read_operand(source, HORIZONTAL_TABS)?;
        if stop == 0 {
            return Ok(());
        }
        sink.print(&format!(" {stop}"));
    }
}

fn read_absolute_position(source: &mut dyn ByteSource, sink: &mut dyn TraceSink) -> Result<()> {
    let n1 = read_operand(source, ABSOLUTE_POSITION)?;
    let n2 = read_operand(source, ABSOLUTE_POSITION)?;
    let position = u16::from(n1) + 256 * u16::from(n2);
    sink.print(&format!(" {position}"));
    Ok(())
}

fn read_graphics_mode(source: &mut dyn ByteSource, sink: &mut dyn TraceSink) -> Result<()> {
    let density = read_operand(source, GRAPHICS_MODE)?;
    let n1 = read_operand(source, GRAPHICS_MODE)?;
    let n2 = read_operand(source, GRAPHICS_MODE)?;
    let columns = u16::from(n1) + 256 * u16::from(n2);
    sink.print(&format!(" density: {density}"));
    sink.print(&format!(" columns: {columns}"));
    for _ in 0..columns {
        // Three data bytes per column, packed big-endian.
        let mut column: u32 = 0;
        for _ in 0..3 {
            column = (column << 8) | u32::from(read_operand(source, GRAPHICS_MODE)?);
        }
        sink.print(&format!(" {column:06x}"));
    }
    Ok(())
}
