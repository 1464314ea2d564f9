//! HTTP API module for the Rate Resolution Engine.
//!
//! This module provides the REST endpoints for replacing and listing the
//! stored rate set and for resolving prices.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PriceQuery, RatesUpdateRequest};
pub use response::{ApiErrorResponse, PriceResponse, RateRow, RatesResponse};
pub use state::AppState;
