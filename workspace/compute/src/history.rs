pub mod cache;
pub mod fixture;

use async_trait::async_trait;
use common::{EmissionsRecord, RawEmissionsRecord};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

pub use cache::HistoryCacheSource;
pub use fixture::FixtureHistorySource;

/// Supplies the historical emissions of an entity.
///
/// Records are expected in ascending year order. Implementations may reach
/// out to a remote service, hence the async interface.
#[async_trait]
pub trait HistoricalDataSource: Send + Sync {
    /// Returns the records of `entity_id` relevant for a forecast starting at `baseline_year`.
    async fn fetch_history(
        &self,
        entity_id: &str,
        baseline_year: i32,
    ) -> Result<Vec<RawEmissionsRecord>>;
}

/// Parses raw records into typed ones.
///
/// Fails with [`ComputeError::MalformedInput`] on a non-numeric year label,
/// on non-finite or negative emissions, and when years are not strictly
/// increasing.
#[instrument(skip(raw), fields(records = raw.len()))]
pub fn parse_history(raw: &[RawEmissionsRecord]) -> Result<Vec<EmissionsRecord>> {
    let mut records: Vec<EmissionsRecord> = Vec::with_capacity(raw.len());

    for (index, item) in raw.iter().enumerate() {
        let year = item.year.trim().parse::<i32>().map_err(|e| {
            ComputeError::MalformedInput(format!(
                "record {} has year label '{}' which is not a year: {}",
                index, item.year, e
            ))
        })?;

        if !item.emissions.is_finite() || item.emissions < 0.0 {
            return Err(ComputeError::MalformedInput(format!(
                "record {} ({}) has invalid emissions {}",
                index, year, item.emissions
            )));
        }

        if let Some(previous) = records.last() {
            if previous.year >= year {
                return Err(ComputeError::MalformedInput(format!(
                    "record {} ({}) does not come after year {}",
                    index, year, previous.year
                )));
            }
        }

        records.push(EmissionsRecord::new(year, item.emissions));
    }

    debug!("Parsed {} historical records", records.len());
    Ok(records)
}
