//! Outcome types for bulk operations.
//!
//! Bulk actions in the console ("apply this status to N selected rows")
//! are a sequential loop of independent requests, not a batched server
//! call. A failure mid-loop rolls nothing back; the outcome records which
//! items succeeded and which failed so the caller can report both.

use uuid::Uuid;

use crate::domain::ApiError;

/// One item that failed during a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure {
    /// Identifier of the item the request targeted.
    pub id: Uuid,
    /// Normalized error the item's request failed with.
    pub error: ApiError,
}

/// Result of a bulk operation: per-item successes and failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Items whose request succeeded, in request order.
    pub updated: Vec<Uuid>,
    /// Items whose request failed, in request order.
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    /// True when every item succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub(crate) fn record(&mut self, id: Uuid, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.updated.push(id),
            Err(error) => self.failed.push(BulkFailure { id, error }),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn outcome_records_successes_and_failures_in_order() {
        let mut outcome = BulkOutcome::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();

        outcome.record(first, Ok(()));
        outcome.record(second, Err(ApiError::new("store not found")));
        outcome.record(third, Ok(()));

        assert!(!outcome.is_complete());
        assert_eq!(outcome.updated, vec![first, third]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(
            outcome.failed.first().map(|failure| failure.id),
            Some(second)
        );
    }

    #[rstest]
    fn empty_outcome_is_complete() {
        assert!(BulkOutcome::default().is_complete());
    }
}
