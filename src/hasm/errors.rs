//! Errors that can occur during the lifetime of the tool.
use std::io::{Error as IOError, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::hasm::token::lexer::LexingError;

/// Numeric classification of every fatal condition.
///
/// The discriminant is the exit status of the process. External tooling
/// tells failure causes apart by these values, so they must never be
/// renumbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ErrorId {
    /// The logging subscriber could not be installed.
    LoggerSetup = 1,
    /// The source file does not exist.
    FileNotFound = 10,
    /// The source file exists but could not be read as text.
    FileUnreadable = 11,
    /// No lexical rule matches the current position.
    IllegalCharacter = 20,
    /// Malformed `0x` literal.
    InvalidHexLiteral = 21,
    /// Malformed `0o` literal.
    InvalidOctLiteral = 22,
    /// Malformed `0b` literal.
    InvalidBinLiteral = 23,
    /// Malformed decimal integer literal.
    InvalidIntLiteral = 24,
    /// Malformed floating point literal.
    InvalidFloatLiteral = 25,
}

impl ErrorId {
    /// The exit status attached to this error.
    #[must_use]
    #[expect(
        clippy::as_conversions,
        reason = "reading the discriminant of a fieldless repr(u8) enum."
    )]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ErrorId> for ExitCode {
    fn from(value: ErrorId) -> Self {
        ExitCode::from(value.code())
    }
}

/// An error that stops the assembler.
///
/// Every variant has already been reported through the diagnostic
/// subsystem by the time it reaches the outer shell; what is left to do
/// is turning it into an [`ExitCode`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssemblyError {
    /// The logging backend refused to initialize.
    #[error("failed to initialize logging: {0}")]
    LoggerSetup(String),
    /// The source file does not exist.
    #[error("{}: no such file", .0.display())]
    FileNotFound(PathBuf),
    /// The source file could not be read.
    #[error("{}: cannot read file: {1}", .0.display())]
    FileUnreadable(PathBuf, #[source] IOError),
    /// Tokenization failed.
    #[error(transparent)]
    Lexing(#[from] LexingError),
}

impl AssemblyError {
    /// Classifies an I/O failure that happened while loading `path`.
    #[must_use]
    pub fn from_io(path: PathBuf, error: IOError) -> Self {
        if error.kind() == ErrorKind::NotFound {
            AssemblyError::FileNotFound(path)
        } else {
            AssemblyError::FileUnreadable(path, error)
        }
    }

    /// The classification used as exit status.
    #[must_use]
    pub fn id(&self) -> ErrorId {
        match *self {
            AssemblyError::LoggerSetup(_) => ErrorId::LoggerSetup,
            AssemblyError::FileNotFound(_) => ErrorId::FileNotFound,
            AssemblyError::FileUnreadable(_, _) => ErrorId::FileUnreadable,
            AssemblyError::Lexing(ref err) => err.id(),
        }
    }
}

impl From<AssemblyError> for ExitCode {
    fn from(value: AssemblyError) -> Self {
        value.id().into()
    }
}
