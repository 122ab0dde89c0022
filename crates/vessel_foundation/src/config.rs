//! Failure policy for misused checked accessors.
//!
//! When unwinding is available a bad access raises [`BadVariantAccess`] as a
//! panic payload so callers can recover it with `catch_unwind`. When it is not
//! (the crate is built with `panic = "abort"`), or when the
//! `abort-on-bad-access` feature is enabled, the process aborts instead.

use std::fmt;
use std::panic;
use std::process;

use crate::error::BadVariantAccess;

/// What happens when a checked accessor is misused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Unwind with a [`BadVariantAccess`] payload.
    Unwind,
    /// Log and abort the process.
    Abort,
}

impl FailurePolicy {
    /// The policy selected at compile time.
    #[must_use]
    pub const fn active() -> Self {
        if cfg!(feature = "abort-on-bad-access") || cfg!(panic = "abort") {
            Self::Abort
        } else {
            Self::Unwind
        }
    }

    /// Returns true if misuse can be caught by the caller.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Unwind)
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::active()
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unwind => write!(f, "unwind"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// The failure policy this build uses.
pub const FAILURE_POLICY: FailurePolicy = FailurePolicy::active();

/// Reports a bad access according to [`FAILURE_POLICY`]. Never returns.
///
/// # Panics
///
/// Under [`FailurePolicy::Unwind`] this always panics with `error` as the
/// payload.
#[cold]
#[inline(never)]
#[track_caller]
pub fn raise(error: BadVariantAccess) -> ! {
    match FAILURE_POLICY {
        FailurePolicy::Unwind => {
            tracing::debug!(%error, operation = ?error.operation, "raising bad variant access");
            panic::panic_any(error)
        }
        FailurePolicy::Abort => {
            tracing::error!(%error, operation = ?error.operation, "bad variant access, aborting");
            process::abort()
        }
    }
}
