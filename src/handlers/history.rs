use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::{CacheInvalidationResponse, EmissionsRecord, ForecastParameters, HistoryResponse};
use compute::{parse_history, HistoricalDataSource};
use tracing::{info, instrument, trace};

use super::{compute_error_response, HandlerError};
use crate::schemas::{ApiResponse, AppState, ErrorResponse, HistoryQuery};

/// Get the historical emissions of an entity
#[utoipa::path(
    get,
    path = "/api/v1/entities/{entity_id}/history",
    tag = "history",
    params(
        ("entity_id" = String, Path, description = "Entity identifier"),
        HistoryQuery,
    ),
    responses(
        (status = 200, description = "History retrieved successfully", body = HistoryResponse),
        (status = 422, description = "Historical data is malformed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_history(
    Path(entity_id): Path<String>,
    Query(query): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<EmissionsRecord>>>), HandlerError> {
    trace!("Entering get_history function");
    let baseline_year = query
        .baseline_year
        .unwrap_or(ForecastParameters::default().baseline_year);

    let raw = state
        .history
        .fetch_history(&entity_id, baseline_year)
        .await
        .map_err(compute_error_response)?;
    let records = parse_history(&raw).map_err(compute_error_response)?;

    info!("Retrieved {} historical records for entity {}", records.len(), entity_id);
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(records, "History retrieved successfully")),
    ))
}

/// Drop the cached history of an entity
///
/// The next request for the entity fetches its history from the source again.
/// `data` tells whether anything was cached.
#[utoipa::path(
    delete,
    path = "/api/v1/entities/{entity_id}/history/cache",
    tag = "history",
    params(
        ("entity_id" = String, Path, description = "Entity identifier"),
    ),
    responses(
        (status = 200, description = "Cache entry invalidated", body = CacheInvalidationResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn invalidate_history(
    Path(entity_id): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<bool>>), HandlerError> {
    trace!("Entering invalidate_history function");

    let removed = state.history.invalidate(&entity_id);
    let message = if removed {
        "History cache invalidated"
    } else {
        "No cached history for entity"
    };

    info!("{} for entity {}", message, entity_id);
    Ok((StatusCode::OK, Json(ApiResponse::ok(removed, message))))
}
