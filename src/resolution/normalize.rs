//! Timestamp normalization for price queries.
//!
//! Query instants arrive as ISO-8601 timestamps carrying an explicit UTC
//! offset. Matching against stored rates happens in terms of the local
//! calendar: a day token and a minutes-since-midnight value encoded as an
//! `HHMM` integer. This module performs that single conversion step.

use chrono::{DateTime, Datelike, Timelike};

use crate::error::{EngineError, EngineResult};
use crate::models::Day;

/// Normalizes an instant-with-offset into a `(day, HHMM)` pair.
///
/// The day and time are taken in the offset the timestamp itself carries:
/// `2021-11-22T23:30:00-05:00` normalizes to Monday 2330 even though the
/// same instant is already Tuesday in UTC. Rates are matched against
/// whatever offset the caller supplied; the rate's own `tz` field is not
/// consulted.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimestamp`] when the input does not
/// parse as ISO-8601 with an explicit offset.
///
/// # Example
///
/// ```
/// use rate_engine::models::Day;
/// use rate_engine::resolution::normalize_timestamp;
///
/// // 2021-11-22 is a Monday
/// let (day, minute) = normalize_timestamp("2021-11-22T10:30:00-05:00").unwrap();
/// assert_eq!(day, Day::Mon);
/// assert_eq!(minute, 1030);
///
/// // No offset is an error, not a default
/// assert!(normalize_timestamp("2021-11-22T10:30:00").is_err());
/// ```
pub fn normalize_timestamp(value: &str) -> EngineResult<(Day, u16)> {
    let instant =
        DateTime::parse_from_rfc3339(value).map_err(|_| EngineError::MalformedTimestamp {
            value: value.to_string(),
        })?;

    let day = Day::from_weekday(instant.weekday());
    let minute_of_day = (instant.hour() * 100 + instant.minute()) as u16;
    Ok((day, minute_of_day))
}
