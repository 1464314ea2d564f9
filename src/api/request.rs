//! Request types for the Rate Resolution Engine API.
//!
//! This module defines the JSON body for `PUT /rates` and the query
//! parameters for `GET /price`.

use serde::{Deserialize, Serialize};

use crate::models::RateSubmission;

/// Request body for the `PUT /rates` endpoint.
///
/// Carries the complete replacement rate set. An absent `rates` key is
/// treated the same as an empty list: the engine rejects it with its own
/// message rather than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesUpdateRequest {
    /// The rate records that will replace the stored set wholesale.
    #[serde(default)]
    pub rates: Vec<RateSubmission>,
}

/// Query parameters for the `GET /price` endpoint.
///
/// Both bounds are ISO-8601 timestamps with explicit UTC offsets, e.g.
/// `?start=2021-11-22T07:00:00-05:00&end=2021-11-22T12:00:00-05:00`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuery {
    /// Start of the query interval.
    pub start: String,
    /// End of the query interval.
    pub end: String,
}
