use common::ForecastParameters;

use super::helpers::{historical_row, history};
use super::{TestScenario, TestScenarioBuilder};

/// Target year already behind the current year: history only, nothing to offset.
pub struct ScenarioTargetPassed {}

impl ScenarioTargetPassed {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioTargetPassed {
    fn get_scenario(&self) -> TestScenario {
        let params = ForecastParameters {
            baseline_year: 2019,
            target_year: 2022,
            reduction_target_percent: 30.0,
            activity_growth_percent: 5.0,
            offset_rate_percent: 15.0,
        };

        TestScenario {
            history: history(&[(2019, 500.0), (2020, 230.0)]),
            params,
            current_year: 2024,
            expected_rows: vec![
                historical_row(2019, 500.0, 500.0),
                historical_row(2020, 230.0, 450.0),
            ],
            expected_total_offset: 0.0,
        }
    }
}
