use common::ForecastResult;
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::Result;

pub const YEAR_COLUMN: &str = "year";
pub const ACTIVITY_COLUMN: &str = "forecasted_activity";
pub const EMISSIONS_COLUMN: &str = "forecasted_emissions";
pub const OFFSET_COLUMN: &str = "forecasted_offset";
pub const TRAJECTORY_COLUMN: &str = "target_trajectory";

/// Lays a forecast out as one column per track.
///
/// Columns: `year` (i32) followed by the four f64 tracks, one row per year
/// in series order.
#[instrument(skip(result), fields(rows = result.series.len()))]
pub fn forecast_to_dataframe(result: &ForecastResult) -> Result<DataFrame> {
    let series = &result.series;

    let years: Vec<i32> = series.iter().map(|c| c.year).collect();
    let activity: Vec<f64> = series.iter().map(|c| c.forecasted_activity).collect();
    let emissions: Vec<f64> = series.iter().map(|c| c.forecasted_emissions).collect();
    let offset: Vec<f64> = series.iter().map(|c| c.forecasted_offset).collect();
    let trajectory: Vec<f64> = series.iter().map(|c| c.target_trajectory).collect();

    let df = DataFrame::new(vec![
        Series::new(YEAR_COLUMN.into(), years).into(),
        Series::new(ACTIVITY_COLUMN.into(), activity).into(),
        Series::new(EMISSIONS_COLUMN.into(), emissions).into(),
        Series::new(OFFSET_COLUMN.into(), offset).into(),
        Series::new(TRAJECTORY_COLUMN.into(), trajectory).into(),
    ])?;

    debug!("Built forecast DataFrame with {} rows", df.height());
    Ok(df)
}
