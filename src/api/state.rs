//! Application state for the Rate Resolution Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::RateStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers — here,
/// the rate store that owns the current rate set.
#[derive(Clone)]
pub struct AppState {
    /// The rate store.
    store: Arc<RateStore>,
}

impl AppState {
    /// Creates a new application state owning the given store.
    pub fn new(store: RateStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the rate store.
    pub fn store(&self) -> &RateStore {
        &self.store
    }
}
