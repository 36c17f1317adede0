use chrono::{Datelike, Utc};
use common::{EmissionsRecord, ForecastParameters, ForecastResult, YearColumn};
use tracing::{debug, instrument, trace, warn};

use crate::error::{ComputeError, Result};
use crate::simulation::{simulate, SimulationState};
use crate::trajectory::TargetTrajectory;

/// Cost of one tonne of offset volume.
pub const CARBON_UNIT_COST: f64 = 50.0;

/// Computes emissions pathways from historical data and policy parameters.
///
/// The engine holds no state besides the year it treats as "now", which is
/// where the forward simulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastEngine {
    current_year: i32,
}

impl Default for ForecastEngine {
    /// Uses the current calendar year from the system clock.
    fn default() -> Self {
        Self::new_with_current_year(Utc::now().year())
    }
}

impl ForecastEngine {
    /// Creates an engine that starts simulating at `current_year`.
    pub fn new_with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Forecasts the emissions pathway for one entity.
    ///
    /// The result holds the historical records from the baseline year onwards,
    /// restated as rows, followed by one simulated row per year from the
    /// current year through the target year. The target trajectory is anchored
    /// at the very first historical record, regardless of the baseline year.
    ///
    /// An empty history yields an empty result for any parameters.
    #[instrument(skip(self, history), fields(records = history.len(), current_year = self.current_year))]
    pub fn forecast(
        &self,
        history: &[EmissionsRecord],
        params: &ForecastParameters,
    ) -> Result<ForecastResult> {
        let Some(first) = history.first() else {
            debug!("No historical data, returning empty forecast");
            return Ok(ForecastResult::empty());
        };

        validate_parameters(params)?;

        let trajectory = TargetTrajectory::new(first.emissions, params)?;
        trace!(
            initial_emissions = trajectory.initial_emissions(),
            annual_step = trajectory.annual_step(),
            "Target trajectory anchored"
        );

        let mut series: Vec<YearColumn> = history
            .iter()
            .filter(|record| self.is_restated(record, params))
            .enumerate()
            .map(|(position, record)| {
                YearColumn::historical(record, trajectory.at_offset(position as i64))
            })
            .collect();
        debug!("Restated {} historical records", series.len());

        let seed_record = history
            .iter()
            .find(|record| record.year == params.baseline_year)
            .unwrap_or(first);
        let seed = SimulationState::seed(seed_record.emissions, params.offset_rate_percent);
        trace!(seed_year = seed_record.year, ?seed, "Simulation seeded");

        let simulation = simulate(seed, self.current_year..=params.target_year, params, &trajectory);
        debug!("Simulated {} forward years", simulation.rows.len());

        series.extend(simulation.rows);

        let result = ForecastResult {
            series,
            total_carbon_offset: simulation.total_offset,
            cost_per_year: simulation.total_offset * CARBON_UNIT_COST,
        };

        let missing = result.missing_years();
        if !missing.is_empty() {
            warn!(?missing, "Forecast series is not contiguous");
        }

        Ok(result)
    }

    /// Historical records shown in the series: from the baseline year onwards,
    /// but never a year the simulation covers or one past the target.
    fn is_restated(&self, record: &EmissionsRecord, params: &ForecastParameters) -> bool {
        record.year >= params.baseline_year
            && record.year < self.current_year
            && record.year <= params.target_year
    }
}

fn validate_parameters(params: &ForecastParameters) -> Result<()> {
    let percentages = [
        ("reductionTargetPercent", params.reduction_target_percent),
        ("activityGrowthPercent", params.activity_growth_percent),
        ("offsetRatePercent", params.offset_rate_percent),
    ];

    for (name, value) in percentages {
        if !value.is_finite() {
            return Err(ComputeError::InvalidParameters(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }
    }

    Ok(())
}

/// Forecasts with an engine bound to the current calendar year.
pub fn forecast(history: &[EmissionsRecord], params: &ForecastParameters) -> Result<ForecastResult> {
    ForecastEngine::default().forecast(history, params)
}
