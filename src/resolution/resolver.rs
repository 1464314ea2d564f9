//! Price resolution over a rate snapshot.
//!
//! Resolution is a pure function of the current rate set and the two query
//! instants: no state survives between calls.

use crate::error::EngineResult;
use crate::models::Rate;
use crate::resolution::normalize_timestamp;

/// The outcome of resolving a price query.
///
/// Ambiguity and absence are first-class outcomes, distinguishable from each
/// other and from transport-level failures. They are deliberately not
/// errors: a query with no applicable rate is a valid answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOutcome {
    /// Exactly one rate covers the query interval; its price applies.
    Price(u32),
    /// The query spans a local day boundary, or more than one rate covers
    /// it. The engine does not arbitrate precedence between rates.
    Unavailable,
    /// No rate covers the query interval.
    NotFound,
}

/// Resolves the applicable price for a query interval.
///
/// Both endpoints are normalized in the offset they carry, then the rate
/// set is scanned linearly:
///
/// - endpoints falling on different local calendar days are
///   [`Unavailable`](PriceOutcome::Unavailable), regardless of rate content;
/// - a rate matches when its day list contains the query day and the query
///   window lies entirely within the rate's window, bounds inclusive;
/// - more than one matching rate is
///   [`Unavailable`](PriceOutcome::Unavailable) (ambiguous, not arbitrated);
/// - exactly one yields [`Price`](PriceOutcome::Price), none yields
///   [`NotFound`](PriceOutcome::NotFound).
///
/// The scan carries no index or ordering tie-break; rate sets are small and
/// replaced wholesale.
///
/// # Errors
///
/// Returns [`MalformedTimestamp`](crate::error::EngineError::MalformedTimestamp)
/// when either endpoint fails to parse.
///
/// # Example
///
/// ```
/// use rate_engine::models::{Rate, RateSubmission};
/// use rate_engine::resolution::{resolve_price, PriceOutcome};
///
/// let rates = vec![Rate::from_submission(&RateSubmission {
///     days: Some("mon,tues,thurs".to_string()),
///     times: Some("0900-2100".to_string()),
///     tz: Some("America/Chicago".to_string()),
///     price: Some(1500),
/// })
/// .unwrap()];
///
/// // 2021-11-22 is a Monday
/// let outcome = resolve_price(
///     &rates,
///     "2021-11-22T10:00:00-05:00",
///     "2021-11-22T12:00:00-05:00",
/// )
/// .unwrap();
/// assert_eq!(outcome, PriceOutcome::Price(1500));
/// ```
pub fn resolve_price(rates: &[Rate], start: &str, end: &str) -> EngineResult<PriceOutcome> {
    let (start_day, start_minute) = normalize_timestamp(start)?;
    let (end_day, end_minute) = normalize_timestamp(end)?;

    // Queries may not span a local calendar-day boundary.
    if start_day != end_day {
        return Ok(PriceOutcome::Unavailable);
    }

    let mut matches = rates
        .iter()
        .filter(|rate| rate.applies_on(start_day) && rate.covers(start_minute, end_minute));

    match (matches.next(), matches.next()) {
        (Some(rate), None) => Ok(PriceOutcome::Price(rate.price)),
        (Some(_), Some(_)) => Ok(PriceOutcome::Unavailable),
        (None, _) => Ok(PriceOutcome::NotFound),
    }
}
