use common::{
    CacheInvalidationResponse, ChartDataResponse, ChartDataSet, EmissionsRecord,
    ForecastParameters, ForecastResponse, ForecastResult, HistoryResponse, YearColumn,
};
use compute::history::{FixtureHistorySource, HistoryCacheSource};
use compute::{default_engine, ForecastEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::{Validate, ValidationError};

pub use common::ApiResponse;

/// History source shared across handlers
pub type SharedHistorySource = Arc<HistoryCacheSource<FixtureHistorySource>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Cached historical emissions, keyed by entity
    pub history: SharedHistorySource,
    /// Year the simulation starts at; the system clock is used when unset
    pub current_year: Option<i32>,
}

impl AppState {
    /// Engine for one computation
    pub fn engine(&self) -> ForecastEngine {
        default_engine(self.current_year)
    }
}

/// Query parameters for forecast endpoints
///
/// Omitted parameters take the reference defaults (2019, 2030, 50, 5, 15).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams, Validate)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
#[validate(schema(function = "validate_year_span"))]
pub struct ForecastQuery {
    /// First year included in the historical restatement (1900-2050)
    #[validate(range(min = 1900, max = 2050))]
    pub baseline_year: i32,
    /// Year by which the reduction target should be reached (2022-2050)
    #[validate(range(min = 2022, max = 2050))]
    pub target_year: i32,
    /// Emissions reduction to reach by the target year, in percent (0-100)
    #[validate(range(min = 0.0, max = 100.0))]
    pub reduction_target_percent: f64,
    /// Yearly activity growth, in percent (0-100)
    #[validate(range(min = 0.0, max = 100.0))]
    pub activity_growth_percent: f64,
    /// Yearly emissions offset rate, in percent (0-100)
    #[validate(range(min = 0.0, max = 100.0))]
    pub offset_rate_percent: f64,
}

fn validate_year_span(query: &ForecastQuery) -> Result<(), ValidationError> {
    if query.target_year <= query.baseline_year {
        let mut error = ValidationError::new("year_span");
        error.message = Some("targetYear must be after baselineYear".into());
        return Err(error);
    }
    Ok(())
}

impl Default for ForecastQuery {
    fn default() -> Self {
        ForecastParameters::default().into()
    }
}

impl From<ForecastQuery> for ForecastParameters {
    fn from(query: ForecastQuery) -> Self {
        Self {
            baseline_year: query.baseline_year,
            target_year: query.target_year,
            reduction_target_percent: query.reduction_target_percent,
            activity_growth_percent: query.activity_growth_percent,
            offset_rate_percent: query.offset_rate_percent,
        }
    }
}

impl From<ForecastParameters> for ForecastQuery {
    fn from(params: ForecastParameters) -> Self {
        Self {
            baseline_year: params.baseline_year,
            target_year: params.target_year,
            reduction_target_percent: params.reduction_target_percent,
            activity_growth_percent: params.activity_growth_percent,
            offset_rate_percent: params.offset_rate_percent,
        }
    }
}

/// Query parameters for the history endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Baseline year passed to the data source (default: 2019)
    pub baseline_year: Option<i32>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of entities with cached history
    pub cached_entities: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::get_forecast,
        crate::handlers::forecast::get_chart_data,
        crate::handlers::history::get_history,
        crate::handlers::history::invalidate_history,
    ),
    components(
        schemas(
            ForecastResponse,
            ChartDataResponse,
            HistoryResponse,
            CacheInvalidationResponse,
            ErrorResponse,
            HealthResponse,
            ForecastQuery,
            ForecastParameters,
            ForecastResult,
            YearColumn,
            ChartDataSet,
            EmissionsRecord,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Emissions pathway forecast endpoints"),
        (name = "history", description = "Historical emissions endpoints"),
    ),
    info(
        title = "Pathway API",
        description = "Emissions pathway forecasting - historical restatement, target trajectory and offset simulation",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
