use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ChartDataResponse, ChartDataSet, ForecastParameters, ForecastResponse, ForecastResult};
use compute::{chart::forecast_to_dataframe, forecast_entity};
use tracing::{debug, error, info, instrument, trace};

use super::{compute_error_response, HandlerError};
use crate::helpers::converters::convert_dataframe_to_chart_data;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, ForecastQuery};

async fn compute_forecast(
    state: &AppState,
    entity_id: &str,
    query: ForecastQuery,
) -> Result<ForecastResult, HandlerError> {
    let params = ForecastParameters::from(query);
    let engine = state.engine();
    debug!(
        "Forecasting entity {} from {} with simulation starting {}",
        entity_id,
        params.baseline_year,
        engine.current_year()
    );

    forecast_entity(state.history.as_ref(), &engine, entity_id, &params)
        .await
        .map_err(compute_error_response)
}

/// Get the emissions pathway forecast of an entity
#[utoipa::path(
    get,
    path = "/api/v1/entities/{entity_id}/forecast",
    tag = "forecast",
    params(
        ("entity_id" = String, Path, description = "Entity identifier"),
        ForecastQuery,
    ),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ForecastResponse),
        (status = 400, description = "Invalid forecast parameters", body = ErrorResponse),
        (status = 422, description = "Historical data is malformed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    Path(entity_id): Path<String>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<ForecastResult>>), HandlerError> {
    trace!("Entering get_forecast function");

    let result = compute_forecast(&state, &entity_id, query).await?;
    info!(
        "Forecast for entity {} has {} rows, total offset {}",
        entity_id,
        result.series.len(),
        result.total_carbon_offset
    );

    let message = if result.is_empty() {
        "No historical data for entity"
    } else {
        "Forecast computed successfully"
    };
    Ok((StatusCode::OK, Json(ApiResponse::ok(result, message))))
}

/// Get the forecast of an entity laid out as chart datasets
#[utoipa::path(
    get,
    path = "/api/v1/entities/{entity_id}/chart-data",
    tag = "forecast",
    params(
        ("entity_id" = String, Path, description = "Entity identifier"),
        ForecastQuery,
    ),
    responses(
        (status = 200, description = "Chart data computed successfully", body = ChartDataResponse),
        (status = 400, description = "Invalid forecast parameters", body = ErrorResponse),
        (status = 422, description = "Historical data is malformed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_chart_data(
    Path(entity_id): Path<String>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<ChartDataSet>>), HandlerError> {
    trace!("Entering get_chart_data function");

    let result = compute_forecast(&state, &entity_id, query).await?;
    let df = forecast_to_dataframe(&result).map_err(compute_error_response)?;

    let chart_data = match convert_dataframe_to_chart_data(df) {
        Ok(chart_data) => chart_data,
        Err(e) => {
            error!("Failed to convert forecast DataFrame: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to build chart data", "CONVERSION_ERROR")),
            ));
        }
    };

    debug!("Chart data has {} labels", chart_data.len());
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(chart_data, "Chart data computed successfully")),
    ))
}
