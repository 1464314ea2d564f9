//! Initial-data bootstrap loading.
//!
//! At startup the service can seed its rate set from a JSON file whose body
//! matches the `PUT /rates` request shape. Seed records go through the same
//! validation and atomic replacement path as client submissions; this
//! module only reads and parses the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSubmission;

/// The on-disk seed shape, identical to the `PUT /rates` body.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    rates: Vec<RateSubmission>,
}

/// Loads seed rate submissions from a JSON file.
///
/// # Errors
///
/// - [`EngineError::SeedNotFound`] when the file cannot be read.
/// - [`EngineError::SeedParseError`] when it is not valid JSON of the
///   expected shape.
///
/// # Example
///
/// ```no_run
/// use rate_engine::seed::load_seed_rates;
/// use rate_engine::store::RateStore;
///
/// let store = RateStore::new();
/// let rates = load_seed_rates("./rates.json")?;
/// store.replace_all(&rates)?;
/// # Ok::<(), rate_engine::error::EngineError>(())
/// ```
pub fn load_seed_rates<P: AsRef<Path>>(path: P) -> EngineResult<Vec<RateSubmission>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::SeedNotFound {
        path: path_str.clone(),
    })?;

    let seed: SeedFile =
        serde_json::from_str(&content).map_err(|error| EngineError::SeedParseError {
            path: path_str,
            message: error.to_string(),
        })?;

    Ok(seed.rates)
}
