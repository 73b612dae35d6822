//! Encapsulates all behaviour necessary to lex HASM code.
//!
//! Scanning is one left-to-right pass. At each position the rules are
//! tried most specific first: comments, the two-character comparison
//! operators, delimiters, prefixed literals (`0x`, `0o`, `0b`), floats,
//! integers and finally identifiers. A `.` directly followed by a digit
//! starts a float unless it comes right after a word character.
//!
//! ```text
//! bits 8
//! ldi r1, 0x1F   // -> KEYWORD(bits) INT_LITERAL(8) EOL
//!                //    INSTRUCTION(ldi) IDENTIFIER(r1) HEX_LITERAL(31) EOL EOF
//! ```
//!
//! The first malformed element is reported through the [`Diagnostics`]
//! and ends the scan; no tokens are handed out in that case.
#![allow(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use thiserror::Error;

use crate::hasm::diagnostic::Diagnostics;
use crate::hasm::diagnostic::warnings::WarningId;
use crate::hasm::errors::ErrorId;
use crate::hasm::token::literals::{self, LiteralError, Radix};
use crate::hasm::token::tokens::{KEYWORDS, Mnemonic, Token, TokenKind};
use crate::hasm::types::{Identifier, Position};

/// Errors that can happen during lexing. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexingError {
    /// No rule matches at the current position.
    #[error("illegal character {0:?}")]
    IllegalCharacter(char),
    /// A string hit a raw line break or the end of input before its
    /// closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character literal does not hold exactly one (escaped) character.
    #[error("malformed character literal")]
    MalformedChar,
    /// A block comment is never closed.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// A literal has the right shape but does not decode.
    #[error(transparent)]
    InvalidLiteral(#[from] LiteralError),
}

impl LexingError {
    /// The error classification, used as exit status.
    #[must_use]
    pub fn id(&self) -> ErrorId {
        match *self {
            LexingError::IllegalCharacter(_)
            | LexingError::UnterminatedString
            | LexingError::MalformedChar
            | LexingError::UnterminatedComment => ErrorId::IllegalCharacter,
            LexingError::InvalidLiteral(err) => err.id(),
        }
    }
}

/// Tokenizes the source the diagnostic context is bound to.
///
/// The returned tokens end with exactly one [`TokenKind::EndOfFile`].
/// Warnings are raised through `diag` along the way.
///
/// # Errors
///
/// The first [`LexingError`] encountered. It has already been reported
/// through `diag` when this returns.
pub fn tokenize(diag: &mut Diagnostics<'_>) -> Result<Vec<Token>, LexingError> {
    let name = diag.name();
    let source = diag.source();
    let mut lexer = Lexer {
        source,
        diag,
        pos: 0,
        line: 1,
    };

    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tracing::trace!(target: "hasm::lexer", "{token}");
        let done = matches!(token.kind, TokenKind::EndOfFile);
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(
        file = name,
        tokens = tokens.len(),
        warnings = lexer.diag.raised().len(),
        "tokenized"
    );
    Ok(tokens)
}

/// Scanner state for one source text.
struct Lexer<'diag, 'src> {
    /// The text being scanned.
    source: &'src str,
    /// Where warnings and errors go.
    diag: &'diag mut Diagnostics<'src>,
    /// Byte offset of the next character.
    pos: usize,
    /// 1 plus the number of line breaks consumed so far.
    line: usize,
}

impl<'src> Lexer<'_, 'src> {
    /// Lexes the next token, skipping whitespace and comments.
    fn next_token(&mut self) -> Result<Token, LexingError> {
        loop {
            let position = Position::new(self.line, self.pos);
            self.diag.set_position(position);
            match self.scan() {
                Ok(Some(kind)) => break Ok(Token { kind, position }),
                Ok(None) => {}
                Err(err) => break Err(self.fail(err)),
            }
        }
    }

    /// Reports a fatal error at the current diagnostic position.
    fn fail(&self, err: LexingError) -> LexingError {
        self.diag.error(&err, err.id());
        err
    }

    /// Consumes one element. `None` means it produced no token.
    fn scan(&mut self) -> Result<Option<TokenKind>, LexingError> {
        let Some(c) = self.peek() else {
            return Ok(Some(TokenKind::EndOfFile));
        };
        let next = self.peek_nth(1);
        let kind = match c {
            // Whitespace
            ' ' | '\t' | ',' | '\r' => {
                self.skip(1);
                return Ok(None);
            }
            '\n' => {
                self.skip_while(|c| c == '\n' || c == '\r');
                TokenKind::EndOfLine
            }

            // Comments
            '/' if next == Some('/') => {
                self.skip_while(|c| c != '\n');
                return Ok(None);
            }
            '/' if next == Some('*') => {
                self.block_comment()?;
                return Ok(None);
            }

            // Comparison operators
            '<' if next == Some('=') => self.fixed(2, TokenKind::LessEqual),
            '=' if next == Some('=') => self.fixed(2, TokenKind::EqualEqual),
            '>' if next == Some('=') => self.fixed(2, TokenKind::GreaterEqual),

            // Delimiters
            '.' if next.is_some_and(|c| c.is_ascii_digit()) && !self.after_word() => {
                self.leading_dot_float()?
            }
            '.' => self.fixed(1, TokenKind::Period),
            ';' => self.fixed(1, TokenKind::Semi),
            ':' => self.fixed(1, TokenKind::Colon),
            '~' => self.fixed(1, TokenKind::Tilde),
            '+' => self.fixed(1, TokenKind::Plus),
            '-' => self.fixed(1, TokenKind::Minus),
            '%' => self.fixed(1, TokenKind::Percent),
            '$' => self.fixed(1, TokenKind::Dollar),
            '@' => self.fixed(1, TokenKind::At),
            '#' => self.fixed(1, TokenKind::Hash),
            '[' => self.fixed(1, TokenKind::LeftBracket),
            ']' => self.fixed(1, TokenKind::RightBracket),

            // Literals
            c if c.is_ascii_digit() => self.number()?,
            '"' => self.string()?,
            '\'' => self.character()?,

            // Identifiers, keywords and mnemonics
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            c => return Err(LexingError::IllegalCharacter(c)),
        };
        Ok(Some(kind))
    }

    /// The text not consumed yet.
    fn rest(&self) -> &'src str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// The text consumed since `start`.
    fn since(&self, start: usize) -> &'src str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    /// Peeks at the next character.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks `n` characters beyond the next one.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Whether the previously consumed character is a word character.
    fn after_word(&self) -> bool {
        self.since(0).chars().next_back().is_some_and(is_word)
    }

    /// Consumes the next character, counting line breaks.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "both stay below the length of the source."
    )]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes up to `n` characters.
    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consumes characters as long as they match.
    fn skip_while<F: Fn(char) -> bool>(&mut self, test: F) {
        while self.peek().is_some_and(&test) {
            self.skip(1);
        }
    }

    /// Consumes characters as long as they match and returns them.
    fn eat_while<F: Fn(char) -> bool>(&mut self, test: F) -> &'src str {
        let start = self.pos;
        self.skip_while(test);
        self.since(start)
    }

    /// Consumes a fixed-length token.
    fn fixed(&mut self, len: usize, kind: TokenKind) -> TokenKind {
        self.skip(len);
        kind
    }

    /// Skips a `/* ... */` comment. Comments do not nest.
    fn block_comment(&mut self) -> Result<(), LexingError> {
        let body = self.rest().get(2..).unwrap_or_default();
        let Some((comment, _)) = body.split_once("*/") else {
            return Err(LexingError::UnterminatedComment);
        };
        // Opener, body and closer.
        let len = comment.chars().count().saturating_add(4);
        self.skip(len);
        Ok(())
    }

    /// Lexes prefixed, float and integer literals starting with a digit.
    fn number(&mut self) -> Result<TokenKind, LexingError> {
        let start = self.pos;
        let word = self.eat_while(is_word);

        let mut chars = word.chars();
        if let (Some('0'), Some(radix)) = (chars.next(), chars.next().and_then(Radix::from_prefix)) {
            return Ok(TokenKind::Literal(literals::decode_radix(chars.as_str(), radix)?));
        }

        let is_float = if self.peek() == Some('.') {
            self.skip(1);
            self.skip_while(is_word);
            self.exponent_sign(start);
            true
        } else if word.ends_with(['e', 'E'])
            && matches!(self.peek(), Some('+' | '-'))
            && self.peek_nth(1).is_some_and(is_word)
        {
            self.exponent_sign(start);
            true
        } else {
            has_inner_exponent(word)
        };

        let text = self.since(start);
        let literal = if is_float {
            literals::decode_float(text)?
        } else {
            literals::decode_integer(text)?
        };
        Ok(TokenKind::Literal(literal))
    }

    /// Lexes a float without integer part, like `.5`.
    fn leading_dot_float(&mut self) -> Result<TokenKind, LexingError> {
        let start = self.pos;
        self.skip(1);
        self.skip_while(is_word);
        self.exponent_sign(start);
        Ok(TokenKind::Literal(literals::decode_float(self.since(start))?))
    }

    /// Consumes the sign and digits of an exponent, if the literal
    /// started at `start` currently ends with an exponent marker.
    fn exponent_sign(&mut self, start: usize) {
        if self.since(start).ends_with(['e', 'E']) && matches!(self.peek(), Some('+' | '-')) {
            self.skip(1);
            self.skip_while(is_word);
        }
    }

    /// Lexes a double-quoted string literal.
    fn string(&mut self) -> Result<TokenKind, LexingError> {
        let first_line = self.line;
        self.skip(1);
        let start = self.pos;
        loop {
            match self.peek() {
                None | Some('\n') => return Err(LexingError::UnterminatedString),
                Some('"') => break,
                Some('\\') => {
                    self.skip(1);
                    match self.peek() {
                        None => return Err(LexingError::UnterminatedString),
                        Some('\r') if self.peek_nth(1) == Some('\n') => self.skip(2),
                        Some(_) => self.skip(1),
                    }
                }
                Some(_) => self.skip(1),
            }
        }
        let body = self.since(start);
        self.skip(1);

        let breaks = self.line.saturating_sub(first_line);
        if breaks > 0 {
            self.diag.warn(
                &format!("string literal spans {} lines", breaks.saturating_add(1)),
                WarningId::MultilineString,
            );
        }
        Ok(TokenKind::Literal(literals::decode_string(body)))
    }

    /// Lexes a single-quoted character literal.
    fn character(&mut self) -> Result<TokenKind, LexingError> {
        self.skip(1);
        let (c, escaped) = match self.bump() {
            Some('\\') => match self.bump() {
                Some(c) if c != '\n' => (c, true),
                Some(_) | None => return Err(LexingError::MalformedChar),
            },
            Some(c) if c != '\n' => (c, false),
            Some(_) | None => return Err(LexingError::MalformedChar),
        };
        if self.bump() != Some('\'') {
            return Err(LexingError::MalformedChar);
        }
        Ok(TokenKind::Literal(literals::decode_char(c, escaped)))
    }

    /// Lexes a name and classifies it, once and for all.
    fn identifier(&mut self) -> TokenKind {
        let ident = self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        if let Some(&kw) = KEYWORDS.get(ident) {
            TokenKind::Keyword(kw)
        } else if let Some(mnemonic) = Mnemonic::lookup(ident) {
            TokenKind::Instruction(mnemonic)
        } else {
            TokenKind::Identifier(Identifier(ident.to_owned()))
        }
    }
}

/// Letters, digits and `_` make up the body of literals.
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether an exponent marker inside `word` is followed by more word
/// characters, as in `1e6`. The first character is always a digit.
fn has_inner_exponent(word: &str) -> bool {
    let mut inner = word.chars();
    let _: Option<char> = inner.next();
    let _: Option<char> = inner.next_back();
    inner.as_str().contains(['e', 'E'])
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::{LexingError, tokenize};
    use crate::hasm::diagnostic::Diagnostics;
    use crate::hasm::diagnostic::warnings::{WarningId, WarningSet};
    use crate::hasm::errors::ErrorId;
    use crate::hasm::token::literals::LiteralError;
    use crate::hasm::token::tokens::Keyword::*;
    use crate::hasm::token::tokens::Mnemonic;
    use crate::hasm::token::tokens::{Token, TokenKind::{self, *}};
    use crate::hasm::types::{Identifier as Ident, Literal, Position};

    fn tokens(source: &str) -> Vec<Token> {
        let mut diag = Diagnostics::new("test.hasm", source, WarningSet::DEFAULT);
        tokenize(&mut diag).expect("Tokenizing failed")
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokens(source).into_iter().map(|token| token.kind).collect()
    }

    fn lines(source: &str) -> Vec<usize> {
        tokens(source).iter().map(|token| token.position.line).collect()
    }

    fn error(source: &str) -> LexingError {
        let mut diag = Diagnostics::new("test.hasm", source, WarningSet::DEFAULT);
        tokenize(&mut diag).expect_err("Tokenizing succeeded")
    }

    fn ident(name: &str) -> TokenKind {
        Identifier(Ident(name.to_owned()))
    }

    fn lit(literal: Literal) -> TokenKind {
        TokenKind::Literal(literal)
    }

    #[test]
    fn empty_source() {
        assert_eq!(kinds(""), vec![EndOfFile]);
        assert_eq!(
            tokens("").first().map(|token| token.position),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn whitespace_and_comments_only() {
        let source = "  , \t// hi\n/* multi\n\nline */\n\n";
        assert_eq!(kinds(source), vec![EndOfLine, EndOfLine, EndOfFile]);
        assert_eq!(lines(source), vec![1, 4, 6]);
        assert_eq!(kinds("// only a comment"), vec![EndOfFile]);
    }

    #[test]
    fn blank_lines_collapse() {
        assert_eq!(
            kinds("nop\n\n\nhlt"),
            vec![Instruction(Mnemonic::Nop), EndOfLine, Instruction(Mnemonic::Hlt), EndOfFile]
        );
        assert_eq!(lines("nop\n\n\nhlt"), vec![1, 1, 4, 4]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(
            kinds("nop\r\n\r\nhlt\r\n"),
            vec![
                Instruction(Mnemonic::Nop),
                EndOfLine,
                Instruction(Mnemonic::Hlt),
                EndOfLine,
                EndOfFile
            ]
        );
    }

    #[test]
    fn delimiters_and_operators() {
        assert_eq!(
            kinds(".;:~+-%$@#[]<= == >="),
            vec![
                Period, Semi, Colon, Tilde, Plus, Minus, Percent, Dollar, At, Hash,
                LeftBracket, RightBracket, LessEqual, EqualEqual, GreaterEqual, EndOfFile
            ]
        );
    }

    #[test]
    fn prefixed_literals() {
        assert_eq!(
            kinds("0xFF 0o17 0b101 0x1_2_3 0X1_2_3 0O1_2_3 0B0000_1111"),
            vec![
                lit(Literal::Hex(255)),
                lit(Literal::Octal(15)),
                lit(Literal::Binary(5)),
                lit(Literal::Hex(291)),
                lit(Literal::Hex(291)),
                lit(Literal::Octal(83)),
                lit(Literal::Binary(15)),
                EndOfFile
            ]
        );
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(
            kinds("123 1_2_3 1.1123 1e6 1e-6 .123 1_1.e+4 0"),
            vec![
                lit(Literal::Integer(123)),
                lit(Literal::Integer(123)),
                lit(Literal::Float(1.1123)),
                lit(Literal::Float(1_000_000.0)),
                lit(Literal::Float(0.000_001)),
                lit(Literal::Float(0.123)),
                lit(Literal::Float(110_000.0)),
                lit(Literal::Integer(0)),
                EndOfFile
            ]
        );
    }

    #[test]
    fn float_boundaries() {
        assert_eq!(
            kinds("1.5-3"),
            vec![lit(Literal::Float(1.5)), Minus, lit(Literal::Integer(3)), EndOfFile]
        );
        assert_eq!(
            kinds("a.5"),
            vec![ident("a"), Period, lit(Literal::Integer(5)), EndOfFile]
        );
        assert_eq!(
            kinds("1..2"),
            vec![lit(Literal::Float(1.0)), lit(Literal::Float(0.2)), EndOfFile]
        );
        assert_eq!(
            kinds("0x1.5"),
            vec![lit(Literal::Hex(1)), Period, lit(Literal::Integer(5)), EndOfFile]
        );
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(error("ldi r1, 0xZZ"), LexingError::InvalidLiteral(LiteralError::Hex));
        assert_eq!(error("0x"), LexingError::InvalidLiteral(LiteralError::Hex));
        assert_eq!(error("0o8"), LexingError::InvalidLiteral(LiteralError::Octal));
        assert_eq!(error("0b1e5"), LexingError::InvalidLiteral(LiteralError::Binary));
        assert_eq!(error("12abc"), LexingError::InvalidLiteral(LiteralError::Integer));
        assert_eq!(error("1e"), LexingError::InvalidLiteral(LiteralError::Integer));
        assert_eq!(error("1ea"), LexingError::InvalidLiteral(LiteralError::Float));
        assert_eq!(error("1.5f"), LexingError::InvalidLiteral(LiteralError::Float));
    }

    #[test]
    fn errors_point_at_the_literal() {
        let source = "bits 8\nldi r1, 0xZZ\n";
        let mut diag = Diagnostics::new("test.hasm", source, WarningSet::DEFAULT);
        let err = tokenize(&mut diag).expect_err("Tokenizing succeeded");
        assert_eq!(err.id(), ErrorId::InvalidHexLiteral);
        assert_eq!(
            diag.context(),
            Some(("ldi r1, 0xZZ".to_owned(), "        ^".to_owned()))
        );
    }

    #[test]
    fn illegal_characters() {
        assert_eq!(error("a = b"), LexingError::IllegalCharacter('='));
        assert_eq!(error("a / b"), LexingError::IllegalCharacter('/'));
        assert_eq!(error("<"), LexingError::IllegalCharacter('<'));
        assert_eq!(error("(").id(), ErrorId::IllegalCharacter);
        assert_eq!(error("h\u{e9}"), LexingError::IllegalCharacter('\u{e9}'));
    }

    #[test]
    fn unterminated_elements() {
        assert_eq!(error("\"abc"), LexingError::UnterminatedString);
        assert_eq!(error("\"ab\ncd\""), LexingError::UnterminatedString);
        assert_eq!(error("\"ab\\"), LexingError::UnterminatedString);
        assert_eq!(error("/* abc"), LexingError::UnterminatedComment);
        assert_eq!(error("'ab'"), LexingError::MalformedChar);
        assert_eq!(error("''"), LexingError::MalformedChar);
        assert_eq!(error("'\n'"), LexingError::MalformedChar);
        assert_eq!(error("/* abc").id(), ErrorId::IllegalCharacter);
    }

    #[test]
    fn string_literals() {
        assert_eq!(
            kinds(r#""a\nb" "hi i'm a string" "say \"hi\"""#),
            vec![
                lit(Literal::String("a\nb".to_owned())),
                lit(Literal::String("hi i'm a string".to_owned())),
                lit(Literal::String("say \"hi\"".to_owned())),
                EndOfFile
            ]
        );
        assert_eq!(
            kinds(r#""a\\" b"#),
            vec![lit(Literal::String(r"a\\".to_owned())), ident("b"), EndOfFile]
        );
    }

    #[test]
    fn escaped_backslash_before_escape_code() {
        // The escape table runs last, so `\\n` keeps a backslash and gains a line feed.
        assert_eq!(
            kinds(r#""\\n" "\\t""#),
            vec![
                lit(Literal::String("\\\n".to_owned())),
                lit(Literal::String("\\\t".to_owned())),
                EndOfFile
            ]
        );
    }

    #[test]
    fn char_literals() {
        assert_eq!(
            kinds(r"'a' '\n' '\t' '\'' '''"),
            vec![
                lit(Literal::Char('a')),
                lit(Literal::Char('\n')),
                lit(Literal::Char('\t')),
                lit(Literal::Char('\'')),
                lit(Literal::Char('\'')),
                EndOfFile
            ]
        );
    }

    #[test]
    fn multiline_string_warns_once() {
        let source = "\"and another \\\nstring\"\nhlt";
        for warnings in [WarningSet::empty(), WarningSet::DEFAULT, WarningSet::ALL] {
            let mut diag = Diagnostics::new("test.hasm", source, warnings);
            let tokens = tokenize(&mut diag).expect("Tokenizing failed");
            assert_eq!(diag.raised(), &[WarningId::MultilineString]);
            assert_eq!(
                tokens.iter().map(|t| (t.kind.clone(), t.position.line)).collect::<Vec<_>>(),
                vec![
                    (lit(Literal::String("and another string".to_owned())), 1),
                    (EndOfLine, 2),
                    (Instruction(Mnemonic::Hlt), 3),
                    (EndOfFile, 3)
                ]
            );
        }
    }

    #[test]
    fn promoted_warning_does_not_stop_scanning() {
        let source = "\"a\\\n\\\nb\" nop";
        let mut diag = Diagnostics::new(
            "test.hasm",
            source,
            WarningSet::ALL | WarningSet::AS_ERRORS,
        );
        let tokens = tokenize(&mut diag).expect("Tokenizing failed");
        assert_eq!(diag.raised(), &[WarningId::MultilineString]);
        assert_eq!(
            tokens.get(1).map(|token| (token.kind.clone(), token.position.line)),
            Some((Instruction(Mnemonic::Nop), 3))
        );
    }

    #[test]
    fn identifiers_keywords_and_mnemonics() {
        assert_eq!(
            kinds("bits 8\nrun rom\nminreg minheap minstack ram\nLDI r1 pc\nloop: JmP loop sp BITS"),
            vec![
                Keyword(Bits), lit(Literal::Integer(8)), EndOfLine,
                Keyword(Run), Keyword(Rom), EndOfLine,
                Keyword(MinReg), Keyword(MinHeap), Keyword(MinStack), Keyword(Ram), EndOfLine,
                Instruction(Mnemonic::Ldi), ident("r1"), Keyword(Pc), EndOfLine,
                ident("loop"), Colon, Instruction(Mnemonic::Jmp), ident("loop"), Keyword(Sp),
                ident("BITS"), EndOfFile
            ]
        );
        assert_eq!(kinds("_tmp1"), vec![ident("_tmp1"), EndOfFile]);
    }

    #[test]
    fn offsets_are_byte_positions() {
        let offsets: Vec<_> = tokens("ldi r1, 0x1F\nhlt")
            .iter()
            .map(|token| token.position.offset)
            .collect();
        assert_eq!(offsets, vec![0, 4, 8, 12, 13, 16]);
    }

    proptest! {
        #[test]
        fn stream_invariants(source in "[a-z0-9 ,.:;#+\\-\\[\\]\n\"'/*\\\\]{0,64}") {
            let mut diag = Diagnostics::new("prop.hasm", &source, WarningSet::DEFAULT);
            if let Ok(tokens) = tokenize(&mut diag) {
                let last = tokens.last().expect("at least EOF");
                prop_assert!(matches!(last.kind, EndOfFile));
                prop_assert_eq!(
                    tokens.iter().filter(|t| matches!(t.kind, EndOfFile)).count(),
                    1
                );
                prop_assert!(
                    tokens
                        .windows(2)
                        .all(|pair| matches!(*pair, [ref a, ref b] if a.position < b.position))
                );
                for token in &tokens {
                    let before = source.get(..token.position.offset).unwrap_or_default();
                    let breaks = before.matches('\n').count();
                    prop_assert_eq!(token.position.line, breaks + 1);
                }
            }
        }
    }
}
