//! Error types for the Rate Resolution Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in rate validation, timestamp normalization,
//! storage, and seed loading.
//!
//! Note that an ambiguous or unmatched price query is *not* an error; those
//! are first-class resolution outcomes (see
//! [`PriceOutcome`](crate::resolution::PriceOutcome)).

use thiserror::Error;

/// The main error type for the Rate Resolution Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The
/// `Display` strings of the validation variants are part of the service's
/// wire surface (they are echoed back to clients verbatim, prefixed with
/// `INVALID INPUT: `).
///
/// # Example
///
/// ```
/// use rate_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeRange {
///     times: "2100-0900".to_string(),
/// };
/// assert_eq!(error.to_string(), "end time must be greater than start time");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Seed data file was not found at the specified path.
    #[error("seed file not found: {path}")]
    SeedNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Seed data file could not be parsed as JSON.
    #[error("failed to parse seed file '{path}': {message}")]
    SeedParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate replacement was submitted with no rates in it.
    #[error("rates must not be empty")]
    EmptyRateSet,

    /// A submitted rate record left out one of its required fields.
    #[error("rates missing required field")]
    MissingRateField {
        /// The field that was missing.
        field: &'static str,
    },

    /// A rate's day list contained a token outside the day vocabulary.
    #[error("unrecognized day token: {token}")]
    UnknownDayToken {
        /// The token that did not parse as a day.
        token: String,
    },

    /// A rate's time window was not a pair of `HHMM` integers.
    #[error("malformed time window: {times}")]
    MalformedTimeWindow {
        /// The time window string that failed to parse.
        times: String,
    },

    /// A rate's time window ended at or before it started.
    #[error("end time must be greater than start time")]
    InvalidTimeRange {
        /// The offending time window, as submitted.
        times: String,
    },

    /// A price query's timestamp did not parse as ISO-8601 with an offset.
    #[error("malformed timestamp: {value}")]
    MalformedTimestamp {
        /// The timestamp string that failed to parse.
        value: String,
    },

    /// The rate store could not be read or written.
    #[error("storage failure: {message}")]
    StorageFailure {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
