//! Types shared by the front-end phases, mostly describing where
//! something sits in the source and what a literal decoded to.

use core::fmt::{Display, Formatter};

/// A Position consists of the line and the absolute byte offset
/// of the first character of an element.
///
/// Positions order by line, then offset. Since lines only grow with the
/// offset, this is the order of appearance in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a position is always line+offset, anything else is a breaking change."
)]
pub struct Position {
    /// Line of the position, 1-indexed.
    pub line: usize,
    /// Byte offset into the source text, 0-indexed.
    pub offset: usize,
}

impl Position {
    /// Construct a position from its line and offset.
    #[must_use]
    pub const fn new(line: usize, offset: usize) -> Self {
        Position { line, offset }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}

/// Decoded literal values. The numeric variants remember the form they
/// were written in, since the assembler may treat them differently.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new literal form MUST be handled and is a breaking change."
)]
pub enum Literal {
    /// `0x` prefixed integer.
    Hex(u64),
    /// `0o` prefixed integer.
    Octal(u64),
    /// `0b` prefixed integer.
    Binary(u64),
    /// Decimal integer.
    Integer(u64),
    /// Floating point number, always finite.
    Float(f64),
    /// String with continuations removed and escapes resolved.
    String(String),
    /// A single character, escape resolved.
    Char(char),
}

impl Literal {
    /// Name of the literal form, as shown in token dumps.
    #[must_use]
    pub const fn form(&self) -> &'static str {
        match *self {
            Literal::Hex(_) => "HEX_LITERAL",
            Literal::Octal(_) => "OCT_LITERAL",
            Literal::Binary(_) => "BIN_LITERAL",
            Literal::Integer(_) => "INT_LITERAL",
            Literal::Float(_) => "FLOAT_LITERAL",
            Literal::String(_) => "STRING_LITERAL",
            Literal::Char(_) => "CHAR_LITERAL",
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            Literal::Hex(value)
            | Literal::Octal(value)
            | Literal::Binary(value)
            | Literal::Integer(value) => write!(f, "{}({value})", self.form()),
            Literal::Float(value) => write!(f, "{}({value:?})", self.form()),
            Literal::String(ref value) => write!(f, "{}({value:?})", self.form()),
            Literal::Char(value) => write!(f, "{}({value:?})", self.form()),
        }
    }
}

/// Identifiers inside HASM (labels, constants, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Identifiers stay as Strings.")]
pub struct Identifier(pub String);

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
