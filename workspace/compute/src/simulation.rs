use std::ops::RangeInclusive;

use common::{ForecastParameters, YearColumn};

use crate::trajectory::TargetTrajectory;

/// Running values of the forward simulation, carried from one year to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub activity: f64,
    pub emissions: f64,
    /// Offset volume needed on entry into the next simulated year
    pub offset: f64,
}

impl SimulationState {
    /// Seeds the simulation from an observed emissions value.
    ///
    /// Activity and emissions both start at the observed value; the entry offset
    /// is the activity grown once by the offset rate.
    pub fn seed(observed_emissions: f64, offset_rate_percent: f64) -> Self {
        Self {
            activity: observed_emissions,
            emissions: observed_emissions,
            offset: observed_emissions + observed_emissions * offset_rate_percent / 100.0,
        }
    }

    /// Derives the following year's state.
    pub fn advance(&self, params: &ForecastParameters) -> Self {
        let activity = self.activity + self.activity * params.activity_growth_percent / 100.0;
        let emissions = self.emissions - self.emissions * params.offset_rate_percent / 100.0;

        Self {
            activity,
            emissions,
            offset: activity - emissions,
        }
    }
}

/// Output of the forward simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardSimulation {
    pub rows: Vec<YearColumn>,
    /// Sum of the entry offsets of every simulated year
    pub total_offset: f64,
}

/// Runs the year-over-year recurrence over `years`.
///
/// Each row stores the offset computed for that year, while the total
/// accumulates the offset the year was entered with (the seed offset for the
/// first year, the previous row's offset afterwards).
pub fn simulate(
    seed: SimulationState,
    years: RangeInclusive<i32>,
    params: &ForecastParameters,
    trajectory: &TargetTrajectory,
) -> ForwardSimulation {
    let capacity = years.clone().count();

    let (_, rows, total_offset) = years.fold(
        (seed, Vec::with_capacity(capacity), 0.0),
        |(last, mut rows, total), year| {
            let next = last.advance(params);
            rows.push(YearColumn {
                year,
                forecasted_activity: next.activity,
                forecasted_emissions: next.emissions,
                forecasted_offset: next.offset,
                target_trajectory: trajectory.at_year(year),
            });
            (next, rows, total + last.offset)
        },
    );

    ForwardSimulation { rows, total_offset }
}
