//! Response types for the Rate Resolution Engine API.
//!
//! The service's wire surface is deliberately plain: listings are row
//! tuples, prices are a one-field object, and failures are bare JSON
//! strings (`"INVALID INPUT: ..."`, `"NOT FOUND"`, `"unavailable"`). This
//! module defines those shapes and the mapping from [`EngineError`] to an
//! HTTP response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::Rate;

/// A stored rate in listing form: `[days, times, tz, price]`.
///
/// Serializes as a JSON array, preserving the listing row shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRow(pub String, pub String, pub String, pub u32);

impl From<&Rate> for RateRow {
    fn from(rate: &Rate) -> Self {
        Self(
            rate.days_label(),
            rate.times_label(),
            rate.tz.clone(),
            rate.price,
        )
    }
}

/// Response body for a non-empty `GET /rates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The stored rates, in store order.
    pub rates: Vec<RateRow>,
}

impl RatesResponse {
    /// Builds the listing body from a store snapshot.
    pub fn from_rates(rates: &[Rate]) -> Self {
        Self {
            rates: rates.iter().map(RateRow::from).collect(),
        }
    }
}

/// Response body for a successfully resolved `GET /price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResponse {
    /// The applicable price in minor currency units.
    pub price: u32,
}

/// An error mapped to an HTTP status and a wire body.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The body, serialized as a bare JSON string.
    pub body: String,
}

impl ApiErrorResponse {
    /// The response for a request body that was not JSON.
    pub fn request_must_be_json() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: "INVALID INPUT: request must be json".to_string(),
        }
    }

    /// The response for a price query missing its `start`/`end` parameters.
    pub fn missing_price_bounds() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: "INVALID INPUT: start and end are required".to_string(),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match &error {
            EngineError::SeedNotFound { .. }
            | EngineError::SeedParseError { .. }
            | EngineError::StorageFailure { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: format!("SERVER ERROR: {error}"),
            },
            _ => Self {
                status: StatusCode::BAD_REQUEST,
                body: format!("INVALID INPUT: {error}"),
            },
        }
    }
}
