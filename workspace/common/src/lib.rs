//! Common transport-layer types shared between the forecasting core and its clients.
//! These structs mirror the API request/response payloads so that any consumer
//! (HTTP client, CLI, chart renderer) can deserialize them without duplicating shapes.

mod chart;
mod forecast;

pub use chart::ChartDataSet;
pub use forecast::{
    EmissionsRecord, ForecastParameters, ForecastResult, RawEmissionsRecord, YearColumn,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    ForecastResponse = ApiResponse<ForecastResult>,
    ChartDataResponse = ApiResponse<ChartDataSet>,
    HistoryResponse = ApiResponse<Vec<EmissionsRecord>>,
    CacheInvalidationResponse = ApiResponse<bool>
)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a successful response.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
