use common::ForecastParameters;

use crate::error::{ComputeError, Result};

/// The linear glide path from the initial emissions down to the reduction goal.
///
/// Values are addressed by an offset `k` from the baseline year:
/// `initial - k * (initial * reduction / 100 / (target - baseline))`.
/// Historical rows pass their position in the baseline-filtered sequence,
/// simulated rows pass their calendar distance from the baseline year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTrajectory {
    initial_emissions: f64,
    baseline_year: i32,
    annual_step: f64,
}

impl TargetTrajectory {
    /// Builds the trajectory anchored at `initial_emissions`.
    ///
    /// Fails with [`ComputeError::InvalidParameters`] when the target year does not
    /// come after the baseline year, since the annual step would divide by zero
    /// or point backwards in time.
    pub fn new(initial_emissions: f64, params: &ForecastParameters) -> Result<Self> {
        let span = i64::from(params.target_year) - i64::from(params.baseline_year);
        if span <= 0 {
            return Err(ComputeError::InvalidParameters(format!(
                "target year {} must be after baseline year {}",
                params.target_year, params.baseline_year
            )));
        }

        let annual_step =
            initial_emissions * params.reduction_target_percent / 100.0 / span as f64;

        Ok(Self {
            initial_emissions,
            baseline_year: params.baseline_year,
            annual_step,
        })
    }

    pub fn initial_emissions(&self) -> f64 {
        self.initial_emissions
    }

    /// Reduction applied per step of the glide path.
    pub fn annual_step(&self) -> f64 {
        self.annual_step
    }

    /// Trajectory value `offset` steps after the anchor.
    pub fn at_offset(&self, offset: i64) -> f64 {
        self.initial_emissions - offset as f64 * self.annual_step
    }

    /// Trajectory value for a calendar year.
    pub fn at_year(&self, year: i32) -> f64 {
        self.at_offset(i64::from(year) - i64::from(self.baseline_year))
    }
}
