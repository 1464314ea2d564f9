//! HTTP request handlers for the Rate Resolution Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::resolution::{PriceOutcome, resolve_price};

use super::request::{PriceQuery, RatesUpdateRequest};
use super::response::{ApiErrorResponse, PriceResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", get(list_rates_handler).put(replace_rates_handler))
        .route("/price", get(price_handler))
        .with_state(state)
}

/// Handler for PUT /rates.
///
/// Replaces the stored rate set wholesale with the submitted batch. The
/// replacement is all-or-nothing: any validation failure leaves the
/// previously stored set untouched.
async fn replace_rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RatesUpdateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rate replacement request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Request body was not JSON"
            );
            return ApiErrorResponse::request_must_be_json().into_response();
        }
    };

    match state.store().replace_all(&request.rates) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                rates_count = request.rates.len(),
                "Rate set replaced"
            );
            (StatusCode::OK, Json("OK")).into_response()
        }
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = ?error,
                "Rate replacement rejected"
            );
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Handler for GET /rates.
///
/// Returns the stored rates in store order, or a not-found marker when the
/// store is empty.
async fn list_rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.store().snapshot() {
        Ok(rates) if rates.is_empty() => {
            info!(correlation_id = %correlation_id, "Rate listing requested on an empty store");
            (StatusCode::NOT_FOUND, Json("NOT FOUND")).into_response()
        }
        Ok(rates) => {
            info!(
                correlation_id = %correlation_id,
                rates_count = rates.len(),
                "Returning stored rates"
            );
            (StatusCode::OK, Json(RatesResponse::from_rates(&rates))).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Rate listing failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Handler for GET /price.
///
/// Resolves the applicable price for the supplied interval. Ambiguous and
/// cross-day queries answer `"unavailable"`; an interval no rate covers
/// answers the not-found marker.
async fn price_handler(
    State(state): State<AppState>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Price query parameters rejected"
            );
            return ApiErrorResponse::missing_price_bounds().into_response();
        }
    };

    let snapshot = match state.store().snapshot() {
        Ok(snapshot) => snapshot,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Price query failed");
            return ApiErrorResponse::from(error).into_response();
        }
    };

    match resolve_price(&snapshot, &query.start, &query.end) {
        Ok(PriceOutcome::Price(price)) => {
            info!(
                correlation_id = %correlation_id,
                start = %query.start,
                end = %query.end,
                price,
                "Price resolved"
            );
            (StatusCode::OK, Json(PriceResponse { price })).into_response()
        }
        Ok(PriceOutcome::Unavailable) => {
            info!(
                correlation_id = %correlation_id,
                start = %query.start,
                end = %query.end,
                "Price unavailable for interval"
            );
            (StatusCode::OK, Json("unavailable")).into_response()
        }
        Ok(PriceOutcome::NotFound) => {
            info!(
                correlation_id = %correlation_id,
                start = %query.start,
                end = %query.end,
                "No rate covers interval"
            );
            (StatusCode::NOT_FOUND, Json("NOT FOUND")).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Price query rejected");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RateStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(RateStore::new()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn put_rates_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/rates")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_put_rates_with_valid_batch_returns_ok() {
        let router = create_test_router();

        let response = router
            .oneshot(put_rates_request(json!({
                "rates": [
                    {"days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}
                ]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!("OK"));
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips_the_listing_shape() {
        let router = create_test_router();

        router
            .clone()
            .oneshot(put_rates_request(json!({
                "rates": [
                    {"days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}
                ]
            })))
            .await
            .unwrap();

        let response = router
            .oneshot(Request::builder().uri("/rates").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"rates": [["mon,tues,thurs", "0900-2100", "America/Chicago", 1500]]})
        );
    }

    #[tokio::test]
    async fn test_price_resolves_through_the_router() {
        let router = create_test_router();

        router
            .clone()
            .oneshot(put_rates_request(json!({
                "rates": [
                    {"days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}
                ]
            })))
            .await
            .unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/price?start=2021-11-22T10:00:00-05:00&end=2021-11-22T12:00:00-05:00")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"price": 1500}));
    }

    #[tokio::test]
    async fn test_price_with_missing_parameters_is_a_client_error() {
        let router = create_test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/price?start=2021-11-22T10:00:00-05:00")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!("INVALID INPUT: start and end are required")
        );
    }
}
