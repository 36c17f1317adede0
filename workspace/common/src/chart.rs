use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Columnar view of a forecast, one vector per dataset, index-aligned with `labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataSet {
    pub labels: Vec<String>,
    pub forecasted_activity: Vec<f64>,
    pub forecasted_emissions: Vec<f64>,
    pub forecasted_offset: Vec<f64>,
    pub target_trajectory: Vec<f64>,
}

impl ChartDataSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
