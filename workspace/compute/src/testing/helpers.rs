use common::EmissionsRecord;

use super::AssertRow;

pub fn history(records: &[(i32, f64)]) -> Vec<EmissionsRecord> {
    records
        .iter()
        .map(|&(year, emissions)| EmissionsRecord::new(year, emissions))
        .collect()
}

/// Trajectory value `offset` steps after the anchor, in the engine's operation order.
pub fn trajectory_value(initial: f64, reduction_percent: f64, span_years: i32, offset: i32) -> f64 {
    initial - f64::from(offset) * (initial * reduction_percent / 100.0 / f64::from(span_years))
}

/// A restated historical row: activity mirrors emissions, no offset.
pub fn historical_row(year: i32, emissions: f64, trajectory: f64) -> AssertRow {
    (year, emissions, emissions, 0.0, trajectory)
}
