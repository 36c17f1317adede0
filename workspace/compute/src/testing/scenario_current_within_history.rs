use common::ForecastParameters;

use super::helpers::{historical_row, history};
use super::{TestScenario, TestScenarioBuilder};

/// Observations reach past the current year.
///
/// Records from the current year on are covered by the simulation and are not
/// restated, so no year appears twice. Zero growth and zero offset rate keep
/// the simulated tracks flat.
pub struct ScenarioCurrentWithinHistory {}

impl ScenarioCurrentWithinHistory {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioCurrentWithinHistory {
    fn get_scenario(&self) -> TestScenario {
        let params = ForecastParameters {
            baseline_year: 2022,
            target_year: 2027,
            reduction_target_percent: 30.0,
            activity_growth_percent: 0.0,
            offset_rate_percent: 0.0,
        };

        let expected_rows = vec![
            historical_row(2022, 100.0, 100.0),
            historical_row(2023, 90.0, 94.0),
            (2024, 100.0, 100.0, 0.0, 88.0),
            (2025, 100.0, 100.0, 0.0, 82.0),
            (2026, 100.0, 100.0, 0.0, 76.0),
            (2027, 100.0, 100.0, 0.0, 70.0),
        ];

        TestScenario {
            history: history(&[(2022, 100.0), (2023, 90.0), (2024, 80.0), (2025, 70.0)]),
            params,
            current_year: 2024,
            expected_rows,
            // only the seed offset is non-zero
            expected_total_offset: 100.0,
        }
    }
}
