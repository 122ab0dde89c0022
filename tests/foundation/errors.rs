//! Integration tests for the access error and failure policy
//!
//! Tests error construction, display, and how misuse is raised.

use std::panic;

use vessel_foundation::{
    AccessErrorKind, BadVariantAccess, FAILURE_POLICY, FailurePolicy, NPOS, raise,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn wrong_alternative_carries_indices() {
    let err = BadVariantAccess::wrong_alternative(3, 1);
    assert_eq!(
        err.kind,
        AccessErrorKind::WrongAlternative {
            requested: 3,
            active: 1
        }
    );
    let msg = format!("{err}");
    assert!(msg.contains('3'));
    assert!(msg.contains('1'));
}

#[test]
fn valueless_is_its_own_kind() {
    let err = BadVariantAccess::for_index(0, NPOS);
    assert_eq!(err.kind, AccessErrorKind::Valueless);
    assert!(format!("{err}").contains("valueless"));
}

#[test]
fn operation_does_not_change_message() {
    let plain = BadVariantAccess::wrong_alternative(0, 1);
    let tagged = plain.with_operation("get_as");
    assert_eq!(plain.to_string(), tagged.to_string());
    assert_eq!(tagged.operation, Some("get_as"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&BadVariantAccess::valueless());
}

// =============================================================================
// Failure Policy
// =============================================================================

#[test]
fn policy_reflects_build() {
    if cfg!(feature = "abort-on-bad-access") {
        assert_eq!(FAILURE_POLICY, FailurePolicy::Abort);
    } else {
        assert_eq!(FAILURE_POLICY, FailurePolicy::Unwind);
    }
}

#[cfg(not(feature = "abort-on-bad-access"))]
#[test]
fn raise_panics_with_error_payload() {
    let payload = panic::catch_unwind(|| {
        raise(BadVariantAccess::valueless().with_operation("at"));
    })
    .unwrap_err();
    let err = payload.downcast::<BadVariantAccess>().unwrap();
    assert!(err.is_valueless());
    assert_eq!(err.operation, Some("at"));
}
