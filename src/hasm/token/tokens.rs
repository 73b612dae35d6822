//! Data types representing tokens available in HASM.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::hasm::types::{Identifier, Literal, Position};
use crate::hasm::util::map;

/// Reserved words of the header section and the special registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Keyword {
    // Header directives
    /// `"bits"`
    Bits,
    /// `"run"`
    Run,
    /// `"rom"`, a value of `run`
    Rom,
    /// `"ram"`, a value of `run`
    Ram,
    /// `"minreg"`
    MinReg,
    /// `"minheap"`
    MinHeap,
    /// `"minstack"`
    MinStack,

    // Special registers
    /// `"pc"`
    Pc,
    /// `"sp"`
    Sp,
}

impl Keyword {
    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    pub const fn to_raw(self) -> &'static str {
        match self {
            Keyword::Bits => "bits",
            Keyword::Run => "run",
            Keyword::Rom => "rom",
            Keyword::Ram => "ram",
            Keyword::MinReg => "minreg",
            Keyword::MinHeap => "minheap",
            Keyword::MinStack => "minstack",
            Keyword::Pc => "pc",
            Keyword::Sp => "sp",
        }
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
/// Matching is case-sensitive.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "bits"     => Keyword::Bits,
        "run"      => Keyword::Run,
        "rom"      => Keyword::Rom,
        "ram"      => Keyword::Ram,
        "minreg"   => Keyword::MinReg,
        "minheap"  => Keyword::MinHeap,
        "minstack" => Keyword::MinStack,

        "pc"       => Keyword::Pc,
        "sp"       => Keyword::Sp,
    }
});

/// Instruction mnemonics of the Hadron CPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Mnemonic {
    // Control
    /// No operation.
    Nop,
    /// Stop the clock.
    Hlt,

    // Arithmetic and logic
    /// Add two registers.
    Add,
    /// Subtract two registers.
    Sub,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise not-or.
    Nor,
    /// Bitwise complement.
    Not,
    /// Shift left by one.
    Lsh,
    /// Shift right by one.
    Rsh,
    /// Increment a register.
    Inc,
    /// Decrement a register.
    Dec,
    /// Compare two registers, setting the flags.
    Cmp,

    // Data movement
    /// Copy a register.
    Mov,
    /// Load an immediate.
    Ldi,
    /// Add an immediate.
    Adi,
    /// Load from memory.
    Lod,
    /// Store to memory.
    Str,
    /// Push onto the stack.
    Psh,
    /// Pop off the stack.
    Pop,

    // Branching
    /// Unconditional jump.
    Jmp,
    /// Branch on a condition.
    Brh,
    /// Call a subroutine.
    Cal,
    /// Return from a subroutine.
    Ret,
}

impl Mnemonic {
    /// Looks up a mnemonic, ignoring case.
    #[must_use]
    pub fn lookup(ident: &str) -> Option<Self> {
        INSTRUCTIONS.get(ident.to_ascii_lowercase().as_str()).copied()
    }

    /// Canonical (lowercase) spelling.
    #[must_use]
    pub const fn to_raw(self) -> &'static str {
        match self {
            Mnemonic::Nop => "nop",
            Mnemonic::Hlt => "hlt",
            Mnemonic::Add => "add",
            Mnemonic::Sub => "sub",
            Mnemonic::And => "and",
            Mnemonic::Or => "or",
            Mnemonic::Xor => "xor",
            Mnemonic::Nor => "nor",
            Mnemonic::Not => "not",
            Mnemonic::Lsh => "lsh",
            Mnemonic::Rsh => "rsh",
            Mnemonic::Inc => "inc",
            Mnemonic::Dec => "dec",
            Mnemonic::Cmp => "cmp",
            Mnemonic::Mov => "mov",
            Mnemonic::Ldi => "ldi",
            Mnemonic::Adi => "adi",
            Mnemonic::Lod => "lod",
            Mnemonic::Str => "str",
            Mnemonic::Psh => "psh",
            Mnemonic::Pop => "pop",
            Mnemonic::Jmp => "jmp",
            Mnemonic::Brh => "brh",
            Mnemonic::Cal => "cal",
            Mnemonic::Ret => "ret",
        }
    }
}

/// Lookup table of the instruction set, keyed by lowercase spelling.
static INSTRUCTIONS: LazyLock<HashMap<&'static str, Mnemonic>> = LazyLock::new(|| {
    [
        Mnemonic::Nop, Mnemonic::Hlt,
        Mnemonic::Add, Mnemonic::Sub, Mnemonic::And, Mnemonic::Or, Mnemonic::Xor,
        Mnemonic::Nor, Mnemonic::Not, Mnemonic::Lsh, Mnemonic::Rsh, Mnemonic::Inc,
        Mnemonic::Dec, Mnemonic::Cmp,
        Mnemonic::Mov, Mnemonic::Ldi, Mnemonic::Adi, Mnemonic::Lod, Mnemonic::Str,
        Mnemonic::Psh, Mnemonic::Pop,
        Mnemonic::Jmp, Mnemonic::Brh, Mnemonic::Cal, Mnemonic::Ret,
    ]
    .into_iter()
    .map(|mnemonic| (mnemonic.to_raw(), mnemonic))
    .collect()
});

/// An enum covering all possible variations a token can take on.
///
/// Identifiers are classified exactly once, by the lexer: consumers
/// dispatch on [`Keyword`](TokenKind::Keyword) and
/// [`Instruction`](TokenKind::Instruction) and never look names up again.
#[derive(Debug, Clone, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "consumers dispatch on every kind, a new one is a breaking change."
)]
pub enum TokenKind {
    // Delimiters
    /// `"."`
    Period,
    /// `";"`
    Semi,
    /// `":"`
    Colon,
    /// `"~"`
    Tilde,
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"%"`
    Percent,
    /// `"$"`
    Dollar,
    /// `"@"`
    At,
    /// `"#"`
    Hash,
    /// `"["`
    LeftBracket,
    /// `"]"`
    RightBracket,

    // Comparison operators
    /// `"<="`
    LessEqual,
    /// `"=="`
    EqualEqual,
    /// `">="`
    GreaterEqual,

    /// A literal with its decoded value.
    Literal(Literal),

    /// A name that is neither keyword nor mnemonic.
    Identifier(Identifier),
    /// A reserved word.
    Keyword(Keyword),
    /// An instruction mnemonic.
    Instruction(Mnemonic),

    /// A run of one or more line breaks.
    EndOfLine,
    /// End of the source text, always the last token.
    EndOfFile,
}

impl TokenKind {
    /// Extract the raw representation of fixed tokens, or the name
    /// of the token class for everything else.
    fn name(&self) -> &str {
        match *self {
            TokenKind::Period => ".",
            TokenKind::Semi => ";",
            TokenKind::Colon => ":",
            TokenKind::Tilde => "~",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Percent => "%",
            TokenKind::Dollar => "$",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LessEqual => "<=",
            TokenKind::EqualEqual => "==",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Literal(ref literal) => literal.form(),
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Instruction(_) => "INSTRUCTION",
            TokenKind::EndOfLine => "EOL",
            TokenKind::EndOfFile => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            TokenKind::Literal(ref literal) => write!(f, "{literal}"),
            TokenKind::Identifier(ref ident) => write!(f, "{}({ident})", self.name()),
            TokenKind::Keyword(kw) => write!(f, "{}({})", self.name(), kw.to_raw()),
            TokenKind::Instruction(mn) => write!(f, "{}({})", self.name(), mn.to_raw()),
            TokenKind::Period
            | TokenKind::Semi
            | TokenKind::Colon
            | TokenKind::Tilde
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Percent
            | TokenKind::Dollar
            | TokenKind::At
            | TokenKind::Hash
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::LessEqual
            | TokenKind::EqualEqual
            | TokenKind::GreaterEqual
            | TokenKind::EndOfLine
            | TokenKind::EndOfFile => f.write_str(self.name()),
        }
    }
}

/// A token: its kind (carrying the decoded value) and where it starts.
#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "a token is its kind at a position.")]
pub struct Token {
    /// Kind and value of this token.
    pub kind: TokenKind,
    /// Line and offset of the first character.
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} @ {}", self.kind, self.position)
    }
}
