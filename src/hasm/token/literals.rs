//! Decoding literal text into values.
//!
//! The lexer finds where a literal ends; the functions here turn the
//! written form into a [`Literal`] or say which form was malformed.
//! They never report anything themselves.
#![allow(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use thiserror::Error;

use crate::hasm::errors::ErrorId;
use crate::hasm::types::Literal;

/// A literal that matched its lexical shape but does not decode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LiteralError {
    /// Bad digit, empty body or overflow in a `0x` literal.
    #[error("invalid hexadecimal literal")]
    Hex,
    /// Bad digit, empty body or overflow in a `0o` literal.
    #[error("invalid octal literal")]
    Octal,
    /// Bad digit, empty body or overflow in a `0b` literal.
    #[error("invalid binary literal")]
    Binary,
    /// Bad digit or overflow in a decimal literal.
    #[error("invalid integer literal")]
    Integer,
    /// Malformed or non-finite floating point literal.
    #[error("invalid float literal")]
    Float,
}

impl LiteralError {
    /// The error classification of this failure.
    #[must_use]
    pub const fn id(self) -> ErrorId {
        match self {
            LiteralError::Hex => ErrorId::InvalidHexLiteral,
            LiteralError::Octal => ErrorId::InvalidOctLiteral,
            LiteralError::Binary => ErrorId::InvalidBinLiteral,
            LiteralError::Integer => ErrorId::InvalidIntLiteral,
            LiteralError::Float => ErrorId::InvalidFloatLiteral,
        }
    }
}

/// Escape codes and the control characters they stand for, in the
/// order they are substituted inside string literals.
const ESCAPE_CODES: [(char, char); 8] = [
    ('n', '\n'),
    ('a', '\x07'),
    ('b', '\x08'),
    ('v', '\x0B'),
    ('f', '\x0C'),
    ('0', '\0'),
    ('t', '\t'),
    ('r', '\r'),
];

/// Maps the character following a backslash to the control character
/// it stands for.
#[must_use]
pub fn escape(c: char) -> Option<char> {
    ESCAPE_CODES
        .into_iter()
        .find(|&(code, _)| code == c)
        .map(|(_, control)| control)
}

/// Removes digit-group separators.
fn strip_separators(text: &str) -> String {
    text.chars().filter(|&c| c != '_').collect()
}

/// The three prefixed integer forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Radix {
    /// `0x`
    Hex,
    /// `0o`
    Octal,
    /// `0b`
    Binary,
}

impl Radix {
    /// Recognizes the letter following the leading `0`.
    #[must_use]
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Radix::Hex),
            'o' | 'O' => Some(Radix::Octal),
            'b' | 'B' => Some(Radix::Binary),
            _ => None,
        }
    }

    /// Numeric base.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Radix::Hex => 16,
            Radix::Octal => 8,
            Radix::Binary => 2,
        }
    }

    /// The error for a malformed literal of this radix.
    const fn error(self) -> LiteralError {
        match self {
            Radix::Hex => LiteralError::Hex,
            Radix::Octal => LiteralError::Octal,
            Radix::Binary => LiteralError::Binary,
        }
    }

    /// The literal of this radix holding `value`.
    const fn wrap(self, value: u64) -> Literal {
        match self {
            Radix::Hex => Literal::Hex(value),
            Radix::Octal => Literal::Octal(value),
            Radix::Binary => Literal::Binary(value),
        }
    }
}

/// Decodes the body of a prefixed literal (the part after `0x`, `0o`
/// or `0b`).
///
/// # Errors
///
/// If the body is empty, contains a digit outside of the radix, or
/// does not fit into 64 bits.
pub fn decode_radix(body: &str, radix: Radix) -> Result<Literal, LiteralError> {
    let digits = strip_separators(body);
    // from_str_radix would accept a leading sign.
    if !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(radix.error());
    }
    u64::from_str_radix(&digits, radix.base())
        .ok()
        .map(|value| radix.wrap(value))
        .ok_or(radix.error())
}

/// Decodes a decimal integer literal.
///
/// # Errors
///
/// If the text contains anything but digits and separators, or the
/// value does not fit into 64 bits.
pub fn decode_integer(text: &str) -> Result<Literal, LiteralError> {
    let digits = strip_separators(text);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LiteralError::Integer);
    }
    digits
        .parse::<u64>()
        .ok()
        .map(Literal::Integer)
        .ok_or(LiteralError::Integer)
}

/// Decodes a floating point literal such as `1.5`, `1e6` or `.123`.
///
/// # Errors
///
/// If the text is not a valid float after removing separators, or
/// the value is not finite.
pub fn decode_float(text: &str) -> Result<Literal, LiteralError> {
    let digits = strip_separators(text);
    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Literal::Float)
        .ok_or(LiteralError::Float)
}

/// Decodes the contents of a string literal, without the quotes.
///
/// The rewrites happen one after the other, each on the result of the
/// previous one: line continuations (a backslash before a line break)
/// are removed, `\"` becomes a quote, then every escape code is
/// replaced in table order. Unknown escapes are kept as written.
#[must_use]
pub fn decode_string(body: &str) -> Literal {
    let mut value = body
        .replace("\\\r\n", "")
        .replace("\\\n", "")
        .replace("\\\"", "\"");
    for (code, control) in ESCAPE_CODES {
        let escaped = format!("\\{code}");
        value = value.replace(&escaped, control.encode_utf8(&mut [0; 4]));
    }
    Literal::String(value)
}

/// Decodes a character literal from its single character, which was
/// either written plainly or after a backslash.
///
/// An escaped character not in the escape table stands for itself,
/// which covers `\'` and `\\`.
#[must_use]
pub fn decode_char(c: char, escaped: bool) -> Literal {
    if escaped {
        Literal::Char(escape(c).unwrap_or(c))
    } else {
        Literal::Char(c)
    }
}
