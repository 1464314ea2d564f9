//! Rate storage for the Rate Resolution Engine.
//!
//! The store owns the entire currently-effective rate set as a single
//! immutable snapshot. Replacement builds the new set off to the side and
//! swaps it in atomically, so readers never block on validation and never
//! observe a partially-replaced set.

use std::sync::{Arc, RwLock};

use crate::error::{EngineError, EngineResult};
use crate::models::{Rate, RateSubmission};

/// The owner of the current rate set.
///
/// There is exactly one mutator, [`replace_all`](RateStore::replace_all),
/// and it is all-or-nothing: every candidate is validated before any state
/// changes, and the previous set is superseded as a unit. Reads hand out the
/// current snapshot as an `Arc`, so a resolver working through a snapshot is
/// unaffected by a concurrent replacement.
///
/// # Example
///
/// ```
/// use rate_engine::models::RateSubmission;
/// use rate_engine::store::RateStore;
///
/// let store = RateStore::new();
/// let batch = vec![RateSubmission {
///     days: Some("mon,tues,thurs".to_string()),
///     times: Some("0900-2100".to_string()),
///     tz: Some("America/Chicago".to_string()),
///     price: Some(1500),
/// }];
///
/// store.replace_all(&batch).unwrap();
/// assert_eq!(store.snapshot().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RateStore {
    rates: RwLock<Arc<[Rate]>>,
}

impl RateStore {
    /// Creates a store with an empty rate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the entire rate set with a validated batch.
    ///
    /// The batch must be non-empty and every submission must validate. On
    /// any failure the error for the first offending submission is returned
    /// and the previously stored set is left completely untouched; there is
    /// no partial overwrite and no partial insert.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyRateSet`] for an empty batch.
    /// - Any validation error from
    ///   [`Rate::from_submission`](crate::models::Rate::from_submission).
    /// - [`EngineError::StorageFailure`] if the store lock is poisoned.
    pub fn replace_all(&self, submissions: &[RateSubmission]) -> EngineResult<()> {
        if submissions.is_empty() {
            return Err(EngineError::EmptyRateSet);
        }

        // Validate the whole batch before touching state.
        let validated = submissions
            .iter()
            .map(Rate::from_submission)
            .collect::<EngineResult<Vec<Rate>>>()?;
        let snapshot: Arc<[Rate]> = validated.into();

        let mut guard = self.rates.write().map_err(|error| EngineError::StorageFailure {
            message: error.to_string(),
        })?;
        *guard = snapshot;
        Ok(())
    }

    /// Returns the current rate set, in submission order.
    ///
    /// The returned snapshot is immutable and detached: a replacement that
    /// lands after this call does not alter it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StorageFailure`] if the store lock is
    /// poisoned.
    pub fn snapshot(&self) -> EngineResult<Arc<[Rate]>> {
        let guard = self.rates.read().map_err(|error| EngineError::StorageFailure {
            message: error.to_string(),
        })?;
        Ok(Arc::clone(&guard))
    }
}
