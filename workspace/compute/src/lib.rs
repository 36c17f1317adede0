pub mod chart;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod history;
pub mod simulation;
pub mod trajectory;

#[cfg(test)]
pub mod testing;

use common::{ForecastParameters, ForecastResult};
use tracing::{info, instrument};

pub use engine::{ForecastEngine, CARBON_UNIT_COST};
pub use error::{ComputeError, Result};
pub use history::{parse_history, HistoricalDataSource};

/// Returns the engine used by the service.
///
/// This function uses the provided year as the current year, or the year of
/// the system clock if none is provided.
pub fn default_engine(current_year: Option<i32>) -> ForecastEngine {
    match current_year {
        Some(year) => ForecastEngine::new_with_current_year(year),
        None => ForecastEngine::default(),
    }
}

/// Fetches the history of an entity and forecasts its pathway.
#[instrument(skip(source, engine, params), fields(current_year = engine.current_year()))]
pub async fn forecast_entity(
    source: &dyn HistoricalDataSource,
    engine: &ForecastEngine,
    entity_id: &str,
    params: &ForecastParameters,
) -> Result<ForecastResult> {
    let raw = source.fetch_history(entity_id, params.baseline_year).await?;
    let history = parse_history(&raw)?;

    let result = engine.forecast(&history, params)?;
    info!(
        rows = result.series.len(),
        total_carbon_offset = result.total_carbon_offset,
        "Forecast computed for entity {}",
        entity_id
    );
    Ok(result)
}
