use common::ForecastParameters;

use super::helpers::{historical_row, history, trajectory_value};
use super::{TestScenario, TestScenarioBuilder};

/// Baseline year without an observed record.
///
/// Historical trajectory values follow the record position (2017 is the
/// anchor, not 2016), the simulation is seeded from the first record and the
/// simulated trajectory follows the calendar.
pub struct ScenarioMissingBaseline {}

impl ScenarioMissingBaseline {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioMissingBaseline {
    fn get_scenario(&self) -> TestScenario {
        let params = ForecastParameters {
            baseline_year: 2016,
            target_year: 2026,
            reduction_target_percent: 50.0,
            activity_growth_percent: 10.0,
            offset_rate_percent: 10.0,
        };
        let trajectory = |offset| trajectory_value(400.0, 50.0, 10, offset);

        let expected_rows = vec![
            historical_row(2017, 400.0, trajectory(0)),
            historical_row(2018, 380.0, trajectory(1)),
            historical_row(2019, 360.0, trajectory(2)),
            (2021, 440.0, 360.0, 80.0, 300.0),
            (2022, 484.0, 324.0, 160.0, 280.0),
            (2023, 532.4, 291.6, 240.8, 260.0),
            (2024, 585.64, 262.44, 323.2, 240.0),
            (2025, 644.204, 236.196, 408.008, 220.0),
            (2026, 708.6244, 212.5764, 496.048, 200.0),
        ];

        TestScenario {
            history: history(&[(2017, 400.0), (2018, 380.0), (2019, 360.0)]),
            params,
            current_year: 2021,
            expected_rows,
            expected_total_offset: 1652.008,
        }
    }
}
