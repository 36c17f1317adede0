use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A historical record as delivered by a data source, with the year still a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RawEmissionsRecord {
    /// Year label, e.g. "2019"
    pub year: String,
    /// Observed emissions in tonnes CO2
    pub emissions: f64,
}

impl RawEmissionsRecord {
    pub fn new(year: impl Into<String>, emissions: f64) -> Self {
        Self {
            year: year.into(),
            emissions,
        }
    }
}

/// One observed historical data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmissionsRecord {
    /// Calendar year of the observation
    pub year: i32,
    /// Observed emissions in tonnes CO2
    pub emissions: f64,
}

impl EmissionsRecord {
    pub fn new(year: i32, emissions: f64) -> Self {
        Self { year, emissions }
    }
}

/// Policy parameters driving a forecast.
///
/// Percentages are plain numbers (`50.0` means 50%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParameters {
    /// First year included in the historical restatement
    pub baseline_year: i32,
    /// Year by which the reduction target should be reached
    pub target_year: i32,
    /// Total emissions cut to reach by the target year, relative to the first historical record
    pub reduction_target_percent: f64,
    /// Year-over-year growth of the simulated activity track
    pub activity_growth_percent: f64,
    /// Year-over-year decay of the simulated emissions track
    pub offset_rate_percent: f64,
}

impl Default for ForecastParameters {
    fn default() -> Self {
        Self {
            baseline_year: 2019,
            target_year: 2030,
            reduction_target_percent: 50.0,
            activity_growth_percent: 5.0,
            offset_rate_percent: 15.0,
        }
    }
}

/// One output row of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearColumn {
    pub year: i32,
    pub forecasted_activity: f64,
    pub forecasted_emissions: f64,
    pub forecasted_offset: f64,
    pub target_trajectory: f64,
}

impl YearColumn {
    /// Restates an observed record. Activity mirrors emissions and no offset is needed.
    pub fn historical(record: &EmissionsRecord, target_trajectory: f64) -> Self {
        Self {
            year: record.year,
            forecasted_activity: record.emissions,
            forecasted_emissions: record.emissions,
            forecasted_offset: 0.0,
            target_trajectory,
        }
    }
}

/// The complete output of one forecast computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Historical rows followed by simulated rows, ordered by year
    pub series: Vec<YearColumn>,
    /// Sum of the offset volume needed over every simulated year
    pub total_carbon_offset: f64,
    /// Cost of the total offset volume at the fixed unit cost
    pub cost_per_year: f64,
}

impl ForecastResult {
    /// The result for an entity without any historical data.
    pub fn empty() -> Self {
        Self {
            series: Vec::new(),
            total_carbon_offset: 0.0,
            cost_per_year: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Years of the series, in order.
    pub fn years(&self) -> Vec<i32> {
        self.series.iter().map(|column| column.year).collect()
    }

    /// Calendar years that fall between two consecutive rows but have no row of their own.
    pub fn missing_years(&self) -> Vec<i32> {
        self.series
            .windows(2)
            .flat_map(|pair| (pair[0].year + 1)..pair[1].year)
            .collect()
    }
}
