//! Rate model and submission validation.
//!
//! A [`Rate`] is a single pricing rule: the weekdays it applies to, a
//! time-of-day window, a timezone label, and a price. Rates enter the system
//! as [`RateSubmission`] boundary records and are validated into immutable
//! [`Rate`] values by [`Rate::from_submission`] before they can reach the
//! store.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Day;

/// A validated pricing rule.
///
/// Time bounds are stored as decomposed `HHMM` integers (e.g. 09:00 is
/// `900`, 21:00 is `2100`) so queries never re-parse the submitted
/// `HHMM-HHMM` string. The invariants `end > start` and non-empty `days`
/// hold for every constructed value; a `Rate` is immutable once validated.
///
/// The `tz` field is stored and echoed back to clients but is not consulted
/// when matching queries: resolution extracts local day and time from the
/// offset the *query* carries. Callers are responsible for supplying
/// correctly-offset instants.
///
/// # Example
///
/// ```
/// use rate_engine::models::{Day, Rate, RateSubmission};
///
/// let submission = RateSubmission {
///     days: Some("mon,tues,thurs".to_string()),
///     times: Some("0900-2100".to_string()),
///     tz: Some("America/Chicago".to_string()),
///     price: Some(1500),
/// };
///
/// let rate = Rate::from_submission(&submission).unwrap();
/// assert_eq!(rate.days, vec![Day::Mon, Day::Tues, Day::Thurs]);
/// assert_eq!(rate.start, 900);
/// assert_eq!(rate.end, 2100);
/// assert!(rate.applies_on(Day::Tues));
/// assert!(rate.covers(1000, 1200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The days this rate applies to, in submission order.
    pub days: Vec<Day>,
    /// Window start as an `HHMM` integer, inclusive.
    pub start: u16,
    /// Window end as an `HHMM` integer, inclusive.
    pub end: u16,
    /// IANA-style timezone label, stored verbatim.
    pub tz: String,
    /// Price in minor currency units.
    pub price: u32,
}

/// A rate record as submitted by clients (and by the seed loader).
///
/// Every field is optional so that presence is checked by validation and
/// reported with the engine's own error message, rather than rejected during
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSubmission {
    /// Comma-separated day tokens, e.g. `"mon,tues,thurs"`.
    pub days: Option<String>,
    /// Time window as `HHMM-HHMM`, e.g. `"0900-2100"`.
    pub times: Option<String>,
    /// Timezone label.
    pub tz: Option<String>,
    /// Price in minor currency units.
    pub price: Option<u32>,
}

impl Rate {
    /// Validates a submission into a `Rate`.
    ///
    /// Checks, in order: presence of every field, the day-token vocabulary,
    /// the `HHMM-HHMM` shape of the time window, and the strict `end >
    /// start` ordering. The first failure is returned and nothing is
    /// constructed.
    pub fn from_submission(submission: &RateSubmission) -> EngineResult<Self> {
        let days_label = submission
            .days
            .as_deref()
            .filter(|label| !label.is_empty())
            .ok_or(EngineError::MissingRateField { field: "days" })?;
        let times = submission
            .times
            .as_deref()
            .ok_or(EngineError::MissingRateField { field: "times" })?;
        let tz = submission
            .tz
            .as_deref()
            .filter(|tz| !tz.is_empty())
            .ok_or(EngineError::MissingRateField { field: "tz" })?;
        let price = submission
            .price
            .ok_or(EngineError::MissingRateField { field: "price" })?;

        let days = days_label
            .split(',')
            .map(str::parse)
            .collect::<EngineResult<Vec<Day>>>()?;

        let (start, end) = parse_time_window(times)?;

        Ok(Self {
            days,
            start,
            end,
            tz: tz.to_string(),
            price,
        })
    }

    /// Returns whether this rate applies on the given day.
    pub fn applies_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    /// Returns whether the query window lies entirely within this rate's
    /// window. Both bounds are inclusive: a query exactly matching the
    /// window is covered.
    pub fn covers(&self, start: u16, end: u16) -> bool {
        self.start <= start && self.end >= end
    }

    /// The day list in its boundary form, e.g. `"mon,tues,thurs"`.
    pub fn days_label(&self) -> String {
        self.days
            .iter()
            .map(|day| day.token())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The time window in its boundary form, e.g. `"0900-2100"`.
    pub fn times_label(&self) -> String {
        format!("{:04}-{:04}", self.start, self.end)
    }
}

/// Parses an `HHMM-HHMM` time window into decomposed integer bounds.
fn parse_time_window(times: &str) -> EngineResult<(u16, u16)> {
    let malformed = || EngineError::MalformedTimeWindow {
        times: times.to_string(),
    };

    let (start_label, end_label) = times.split_once('-').ok_or_else(malformed)?;
    let start: u16 = start_label.parse().map_err(|_| malformed())?;
    let end: u16 = end_label.parse().map_err(|_| malformed())?;
    if start > 2359 || end > 2359 {
        return Err(malformed());
    }
    if end <= start {
        return Err(EngineError::InvalidTimeRange {
            times: times.to_string(),
        });
    }
    Ok((start, end))
}
