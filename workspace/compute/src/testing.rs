pub mod helpers;
pub mod scenario_current_within_history;
pub mod scenario_missing_baseline;
pub mod scenario_target_passed;
pub mod scenario_worked_example;

pub use scenario_current_within_history::ScenarioCurrentWithinHistory;
pub use scenario_missing_baseline::ScenarioMissingBaseline;
pub use scenario_target_passed::ScenarioTargetPassed;
pub use scenario_worked_example::ScenarioWorkedExample;

use approx::assert_relative_eq;
use common::{EmissionsRecord, ForecastParameters, ForecastResult};

use crate::engine::{ForecastEngine, CARBON_UNIT_COST};
use crate::error::Result;

/// Expected row in the following schema
/// (year, forecasted activity, forecasted emissions, forecasted offset, target trajectory)
pub type AssertRow = (i32, f64, f64, f64, f64);

/// Prepared test scenario.
pub struct TestScenario {
    pub history: Vec<EmissionsRecord>,
    pub params: ForecastParameters,
    pub current_year: i32,
    pub expected_rows: Vec<AssertRow>,
    pub expected_total_offset: f64,
}

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Runs the engine on a scenario and checks every row and both totals.
pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) -> Result<ForecastResult> {
    let scenario = builder.get_scenario();
    let engine = ForecastEngine::new_with_current_year(scenario.current_year);

    let result = engine.forecast(&scenario.history, &scenario.params)?;

    let expected_years: Vec<i32> = scenario.expected_rows.iter().map(|row| row.0).collect();
    assert_eq!(result.years(), expected_years);

    for (column, expected) in result.series.iter().zip(&scenario.expected_rows) {
        let (year, activity, emissions, offset, trajectory) = *expected;
        assert_eq!(column.year, year);
        assert_relative_eq!(column.forecasted_activity, activity, max_relative = 1e-9);
        assert_relative_eq!(column.forecasted_emissions, emissions, max_relative = 1e-9);
        assert_relative_eq!(column.forecasted_offset, offset, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(column.target_trajectory, trajectory, max_relative = 1e-9);
    }

    assert_relative_eq!(
        result.total_carbon_offset,
        scenario.expected_total_offset,
        epsilon = 1e-9,
        max_relative = 1e-9
    );
    assert_eq!(result.cost_per_year, result.total_carbon_offset * CARBON_UNIT_COST);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_worked_example() {
        let result = run_and_assert_scenario(&ScenarioWorkedExample::new())
            .expect("Failed to run worked example scenario");

        assert_eq!(result.missing_years(), vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_scenario_missing_baseline() {
        run_and_assert_scenario(&ScenarioMissingBaseline::new())
            .expect("Failed to run missing baseline scenario");
    }

    #[test]
    fn test_scenario_current_within_history() {
        let result = run_and_assert_scenario(&ScenarioCurrentWithinHistory::new())
            .expect("Failed to run current-within-history scenario");

        assert!(result.missing_years().is_empty());
    }

    #[test]
    fn test_scenario_target_passed() {
        run_and_assert_scenario(&ScenarioTargetPassed::new())
            .expect("Failed to run target passed scenario");
    }
}
