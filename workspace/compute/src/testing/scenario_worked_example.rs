use common::ForecastParameters;

use super::helpers::{historical_row, history, trajectory_value};
use super::{TestScenario, TestScenarioBuilder};

/// Two observed years, baseline 2019, target 2030, simulation starting in 2024.
///
/// The simulation is seeded from the 2019 record and the years 2021 to 2023
/// are neither observed nor simulated.
pub struct ScenarioWorkedExample {}

impl ScenarioWorkedExample {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioWorkedExample {
    fn get_scenario(&self) -> TestScenario {
        let params = ForecastParameters {
            baseline_year: 2019,
            target_year: 2030,
            reduction_target_percent: 50.0,
            activity_growth_percent: 5.0,
            offset_rate_percent: 15.0,
        };
        let trajectory = |offset| trajectory_value(500.0, 50.0, 11, offset);

        let expected_rows = vec![
            historical_row(2019, 500.0, trajectory(0)),
            historical_row(2020, 230.0, trajectory(1)),
            (2024, 525.0, 425.0, 100.0, trajectory(5)),
            (2025, 551.25, 361.25, 190.0, trajectory(6)),
            (2026, 578.8125, 307.0625, 271.75, trajectory(7)),
            (2027, 607.753125, 261.003125, 346.75, trajectory(8)),
            (2028, 638.14078125, 221.85265625, 416.288125, trajectory(9)),
            (2029, 670.0478203125, 188.5747578125, 481.4730625, trajectory(10)),
            (2030, 703.550211328125, 160.288544140625, 543.2616671875, 250.0),
        ];

        TestScenario {
            history: history(&[(2019, 500.0), (2020, 230.0)]),
            params,
            current_year: 2024,
            expected_rows,
            // 575 seed offset + every row offset except the last
            expected_total_offset: 2381.2611875,
        }
    }
}
