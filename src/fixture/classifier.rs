//! Recognizes index updates that failed because they ran inside an open transaction.
//!
//! With immediate indexing, a save that dispatches an index update fails when the
//! caller already holds a database transaction (typically a test wrapped in one for
//! isolation). That is an environment constraint rather than a bug in the test, so
//! builders re-raise it as `FixtureError::SideEffectInTransaction`.

use std::error::Error;

use tracing::warn;

use crate::error::{
    index::TRANSACTION_OPEN_SIGNATURE, FixtureError, IndexError, PlatformError,
};

/// Whether `error`, or its immediate cause, reports an index update attempted inside
/// an open database transaction.
///
/// An error matches when it is an `IndexError::TransactionOpen` or when its message
/// carries the transaction-open signature (errors that crossed a string-only boundary,
/// such as `DbErr::Custom`).
pub fn is_transaction_exception(error: &(dyn Error + 'static)) -> bool {
    matches_signature(error) || error.source().is_some_and(matches_signature)
}

fn matches_signature(error: &(dyn Error + 'static)) -> bool {
    if let Some(IndexError::TransactionOpen { .. }) = error.downcast_ref::<IndexError>() {
        return true;
    }
    error.to_string().contains(TRANSACTION_OPEN_SIGNATURE)
}

/// Converts a failed save into the error a builder raises.
///
/// # Returns
/// - `FixtureError::SideEffectInTransaction` - `error` matches the signature; it is kept
///   as the source
/// - `FixtureError::Platform` - Any other error, unchanged
pub fn classify(error: PlatformError) -> FixtureError {
    if is_transaction_exception(&error) {
        warn!("Save failed on a side effect inside an open transaction: {}", error);
        FixtureError::SideEffectInTransaction { source: error }
    } else {
        FixtureError::Platform(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    fn transaction_open() -> IndexError {
        IndexError::TransactionOpen {
            indexer: "catalogsearch_fulltext",
            entity_id: 7,
        }
    }

    #[test]
    fn matches_index_error_itself() {
        assert!(is_transaction_exception(&transaction_open()));
    }

    #[test]
    fn matches_index_error_as_immediate_cause() {
        let error = PlatformError::Index(transaction_open());

        assert!(is_transaction_exception(&error));
    }

    #[test]
    fn matches_signature_in_message() {
        let error = PlatformError::Database(DbErr::Custom(format!(
            "indexer failed {}",
            TRANSACTION_OPEN_SIGNATURE
        )));

        assert!(is_transaction_exception(&error));
    }

    #[test]
    fn ignores_unrelated_errors() {
        let error = PlatformError::Database(DbErr::Custom("UNIQUE constraint failed".to_string()));

        assert!(!is_transaction_exception(&error));
        assert!(!is_transaction_exception(&PlatformError::NoSuchEntity {
            kind: "page",
            id: "1".to_string(),
        }));
    }

    #[test]
    fn classify_wraps_matching_error_as_source() {
        let classified = classify(PlatformError::Index(transaction_open()));

        let FixtureError::SideEffectInTransaction { source } = &classified else {
            panic!("expected SideEffectInTransaction, got {:?}", classified);
        };
        assert!(matches!(source, PlatformError::Index(_)));
        assert!(classified.source().is_some());
    }

    #[test]
    fn classify_passes_other_errors_through_unchanged() {
        let classified = classify(PlatformError::Database(DbErr::Custom("boom".to_string())));

        assert_eq!(classified.to_string(), "Custom Error: boom");
        assert!(matches!(
            classified,
            FixtureError::Platform(PlatformError::Database(DbErr::Custom(ref msg))) if msg == "boom"
        ));
    }
}
