use anyhow::{Context, Result};
use common::{ForecastParameters, ForecastResult};
use compute::chart::forecast_to_dataframe;
use compute::forecast_entity;
use polars::prelude::*;
use std::io::Write;
use tracing::{debug, info, trace};
use validator::Validate;

use crate::cli::OutputFormat;
use crate::config::{initialize_app_state, Settings};
use crate::schemas::ForecastQuery;

pub async fn forecast(
    settings: &Settings,
    entity_id: &str,
    query: ForecastQuery,
    current_year: Option<i32>,
    format: OutputFormat,
) -> Result<()> {
    trace!("Entering forecast command");
    query.validate().context("Invalid forecast parameters")?;

    let mut state = initialize_app_state(settings);
    state.current_year = current_year;
    let engine = state.engine();
    debug!("Forecasting entity {} starting {}", entity_id, engine.current_year());

    let params = ForecastParameters::from(query);
    let result = forecast_entity(state.history.as_ref(), &engine, entity_id, &params)
        .await
        .with_context(|| format!("Failed to forecast entity {}", entity_id))?;
    info!(
        "Forecast for entity {} has {} rows, total offset {}",
        entity_id,
        result.series.len(),
        result.total_carbon_offset
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, &result, format)?;
    out.flush()?;
    Ok(())
}

/// Writes a forecast in the requested format
pub fn write_result<W: Write>(out: &mut W, result: &ForecastResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(result)?;
            write!(out, "{}", yaml)?;
        }
        OutputFormat::Csv => {
            let mut df = forecast_to_dataframe(result)?;
            CsvWriter::new(&mut *out).include_header(true).finish(&mut df)?;
            writeln!(
                out,
                "# totalCarbonOffset={} costPerYear={}",
                result.total_carbon_offset, result.cost_per_year
            )?;
        }
    }
    Ok(())
}
