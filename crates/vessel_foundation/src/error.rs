//! The bad-access error.
//!
//! Raised when a checked accessor asks for an alternative that is not the
//! active one, or when the variant holds no value at all.

use thiserror::Error;

use crate::typelist::NPOS;

/// Result alias for checked variant access.
pub type Result<T, E = BadVariantAccess> = std::result::Result<T, E>;

/// A checked accessor was misused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind}")]
pub struct BadVariantAccess {
    /// What went wrong.
    pub kind: AccessErrorKind,
    /// The accessor that failed, when known.
    pub operation: Option<&'static str>,
}

impl BadVariantAccess {
    /// Creates an error of the given kind.
    #[must_use]
    pub const fn new(kind: AccessErrorKind) -> Self {
        Self {
            kind,
            operation: None,
        }
    }

    /// Creates a wrong-alternative error.
    #[must_use]
    pub const fn wrong_alternative(requested: usize, active: usize) -> Self {
        Self::new(AccessErrorKind::WrongAlternative { requested, active })
    }

    /// Creates a valueless error.
    #[must_use]
    pub const fn valueless() -> Self {
        Self::new(AccessErrorKind::Valueless)
    }

    /// Classifies a failed request for `requested` against the `active` index.
    #[must_use]
    pub const fn for_index(requested: usize, active: usize) -> Self {
        if active == NPOS {
            Self::valueless()
        } else {
            Self::wrong_alternative(requested, active)
        }
    }

    /// Records which accessor failed.
    #[must_use]
    pub const fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Returns true if the variant was valueless.
    #[must_use]
    pub const fn is_valueless(&self) -> bool {
        matches!(self.kind, AccessErrorKind::Valueless)
    }
}

/// Categorized access failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum AccessErrorKind {
    /// A different alternative is active.
    #[error("bad variant access: requested alternative {requested}, active is {active}")]
    WrongAlternative {
        /// Index that was requested.
        requested: usize,
        /// Index that is active.
        active: usize,
    },

    /// The variant is valueless by exception.
    #[error("bad variant access: variant is valueless")]
    Valueless,
}
