//! Warning classification and the suppression/promotion policy.
use bitflags::bitflags;

use crate::hasm::diagnostic::Severity;

/// Numeric tags of the warnings the assembler can raise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum WarningId {
    /// A string literal was written across several physical lines.
    MultilineString = 1,
}

impl WarningId {
    /// Numeric tag attached to the emitted diagnostic.
    #[must_use]
    #[expect(
        clippy::as_conversions,
        reason = "reading the discriminant of a fieldless repr(u16) enum."
    )]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The flag enabling this warning inside a [`WarningSet`].
    #[must_use]
    pub const fn flag(self) -> WarningSet {
        match self {
            WarningId::MultilineString => WarningSet::MULTILINE_STRINGS,
        }
    }
}

bitflags! {
    /// The enabled-warning set, resolved once from the command line.
    ///
    /// Besides one flag per [`WarningId`] it carries the two policy
    /// switches `ALL` and `AS_ERRORS`. The set is `Copy` and never
    /// changes after scanning started.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WarningSet: u8 {
        /// `-Wall`: surface every warning.
        const ALL = 1 << 0;
        /// `-Werr`: display surfaced warnings as errors.
        const AS_ERRORS = 1 << 1;
        /// `-Wmultiline-strings`.
        const MULTILINE_STRINGS = 1 << 2;
    }
}

impl WarningSet {
    /// Warnings that are on unless explicitly removed.
    pub const DEFAULT: WarningSet = WarningSet::MULTILINE_STRINGS;

    /// Decides how a warning is displayed.
    ///
    /// Returns `None` if the warning is suppressed, otherwise the
    /// severity it is displayed with.
    #[must_use]
    pub fn severity_of(self, id: WarningId) -> Option<Severity> {
        if !self.contains(WarningSet::ALL) && !self.contains(id.flag()) {
            return None;
        }
        if self.contains(WarningSet::AS_ERRORS) {
            Some(Severity::Error)
        } else {
            Some(Severity::Warning)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{WarningId, WarningSet};
    use crate::hasm::diagnostic::Severity;

    const ID: WarningId = WarningId::MultilineString;

    #[test]
    fn empty_set_drops_warnings() {
        assert_eq!(WarningSet::empty().severity_of(ID), None);
        assert_eq!(WarningSet::AS_ERRORS.severity_of(ID), None);
    }

    #[test]
    fn own_flag_or_all_surfaces() {
        assert_eq!(WarningSet::DEFAULT.severity_of(ID), Some(Severity::Warning));
        assert_eq!(WarningSet::ALL.severity_of(ID), Some(Severity::Warning));
    }

    #[test]
    fn as_errors_promotes_surfaced_warnings() {
        assert_eq!(
            (WarningSet::ALL | WarningSet::AS_ERRORS).severity_of(ID),
            Some(Severity::Error)
        );
        assert_eq!(
            (WarningSet::MULTILINE_STRINGS | WarningSet::AS_ERRORS).severity_of(ID),
            Some(Severity::Error)
        );
    }

    #[test]
    fn codes() {
        assert_eq!(ID.code(), 1);
        assert_eq!(ID.flag(), WarningSet::MULTILINE_STRINGS);
    }
}
