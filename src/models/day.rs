//! Day-of-week tokens used in rate day lists.
//!
//! The service's day vocabulary is irregular: Tuesday and Thursday are
//! written `tues` and `thurs`, not the standard three-letter abbreviations.
//! Stored rate day lists and normalized query days are compared literally
//! against these tokens, so the mapping is encoded as an explicit lookup
//! rather than derived from a date formatter.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A day of the week in the rate vocabulary.
///
/// The canonical token for each day is produced by [`Day::token`] (and
/// `Display`), and parsed back by `FromStr`. Note the irregular tokens for
/// Tuesday and Thursday.
///
/// # Example
///
/// ```
/// use rate_engine::models::Day;
///
/// assert_eq!(Day::Tues.token(), "tues");
/// assert_eq!(Day::Thurs.to_string(), "thurs");
/// assert_eq!("sat".parse::<Day>().unwrap(), Day::Sat);
/// assert!("tuesday".parse::<Day>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    /// Monday (`mon`).
    Mon,
    /// Tuesday (`tues`).
    Tues,
    /// Wednesday (`wed`).
    Wed,
    /// Thursday (`thurs`).
    Thurs,
    /// Friday (`fri`).
    Fri,
    /// Saturday (`sat`).
    Sat,
    /// Sunday (`sun`).
    Sun,
}

impl Day {
    /// Returns the canonical token for this day.
    pub fn token(self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tues => "tues",
            Day::Wed => "wed",
            Day::Thurs => "thurs",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }

    /// Converts a chrono weekday into the rate vocabulary.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Weekday;
    /// use rate_engine::models::Day;
    ///
    /// assert_eq!(Day::from_weekday(Weekday::Tue), Day::Tues);
    /// assert_eq!(Day::from_weekday(Weekday::Sun), Day::Sun);
    /// ```
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Mon,
            Weekday::Tue => Day::Tues,
            Weekday::Wed => Day::Wed,
            Weekday::Thu => Day::Thurs,
            Weekday::Fri => Day::Fri,
            Weekday::Sat => Day::Sat,
            Weekday::Sun => Day::Sun,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Day {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(Day::Mon),
            "tues" => Ok(Day::Tues),
            "wed" => Ok(Day::Wed),
            "thurs" => Ok(Day::Thurs),
            "fri" => Ok(Day::Fri),
            "sat" => Ok(Day::Sat),
            "sun" => Ok(Day::Sun),
            other => Err(EngineError::UnknownDayToken {
                token: other.to_string(),
            }),
        }
    }
}
