//! Reporting warnings and errors to the user.
//!
//! Diagnostics are written as `tracing` events, so whichever subscriber
//! the binary installs decides about formatting and the log threshold.
//! Every event carries the classification `code` and, when known, the
//! `file` and `line` it refers to.
//!
//! When a position is known, two extra lines are logged ahead of the
//! message: the offending source line and a caret under the offending
//! column.
//!
//! ```text
//! ERROR ldi r1, 0xZZ
//! ERROR         ^
//! ERROR invalid hexadecimal literal
//! ```
pub mod locator;
pub mod warnings;

use core::fmt::{Display, Formatter};

use crate::hasm::errors::ErrorId;
use crate::hasm::types::Position;
use warnings::{WarningId, WarningSet};

/// Severity a diagnostic is displayed with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "there is nothing between a warning and an error."
)]
pub enum Severity {
    /// Something suspicious, assembling continues.
    Warning,
    /// Something wrong.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match *self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Logs a single diagnostic line at the given severity.
///
/// Absent `file` or `line` values are left out of the event.
fn emit(severity: Severity, code: u16, file: Option<&str>, line: Option<usize>, text: &str) {
    match severity {
        Severity::Warning => tracing::warn!(code, file, line, "{text}"),
        Severity::Error => tracing::error!(code, file, line, "{text}"),
    }
}

/// Reports a fatal condition that has no source position, such as a
/// missing input file. `file` names the input it concerns, if any.
///
/// Logging is all this does; the caller propagates the matching error
/// to `main`, which exits with `id` as status.
pub fn error<M: Display + ?Sized>(file: Option<&str>, message: &M, id: ErrorId) {
    emit(Severity::Error, id.code().into(), file, None, &message.to_string());
}

/// The diagnostic context of one tokenization.
///
/// It is bound to exactly one source text and follows the scanner along,
/// so that reports can point at the current position.
#[derive(Debug)]
pub struct Diagnostics<'src> {
    /// Display name of the source, usually its path.
    name: &'src str,
    /// The full text being scanned.
    source: &'src str,
    /// Enabled warnings, read-only.
    warnings: WarningSet,
    /// Where the scanner currently is.
    position: Position,
    /// Every warning raised so far, suppressed or not.
    raised: Vec<WarningId>,
}

impl<'src> Diagnostics<'src> {
    /// Creates the context for scanning `source`.
    #[must_use]
    pub fn new(name: &'src str, source: &'src str, warnings: WarningSet) -> Self {
        Diagnostics {
            name,
            source,
            warnings,
            position: Position::new(1, 0),
            raised: Vec::new(),
        }
    }

    /// The text this context is bound to.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Display name of the source.
    #[must_use]
    pub fn name(&self) -> &'src str {
        self.name
    }

    /// Moves the context to a new position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// All warnings raised in this context, in order, including the
    /// ones the policy suppressed.
    #[must_use]
    pub fn raised(&self) -> &[WarningId] {
        &self.raised
    }

    /// Raises a warning at the current position.
    ///
    /// The warning goes through the policy of the [`WarningSet`]: it is
    /// dropped unless enabled, and displayed as an error under `-Werr`.
    /// Scanning continues in every case.
    pub fn warn<M: Display + ?Sized>(&mut self, message: &M, id: WarningId) {
        self.raised.push(id);
        if let Some(severity) = self.warnings.severity_of(id) {
            self.report(severity, id.code(), &message.to_string());
        }
    }

    /// Reports a fatal error at the current position.
    ///
    /// Errors are never suppressed. The caller must hand the matching
    /// error up to `main` without recovering, which then terminates the
    /// process with `id` as exit status.
    pub fn error<M: Display + ?Sized>(&self, message: &M, id: ErrorId) {
        self.report(Severity::Error, id.code().into(), &message.to_string());
    }

    /// The two context lines for the current position, if it points
    /// into the source.
    #[must_use]
    pub fn context(&self) -> Option<(String, String)> {
        (self.position.offset < self.source.len())
            .then(|| locator::render(self.source, self.position.offset))
    }

    /// Logs context lines (when available) followed by the message.
    fn report(&self, severity: Severity, code: u16, message: &str) {
        let file = Some(self.name);
        let line = Some(self.position.line);
        if let Some((text, caret)) = self.context() {
            emit(severity, code, file, line, &text);
            emit(severity, code, file, line, &caret);
        }
        emit(severity, code, file, line, message);
    }
}
