pub mod forecast;
pub mod health;
pub mod history;

use axum::{http::StatusCode, Json};
use compute::ComputeError;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error half of every handler result
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Maps a compute failure to an HTTP status and error code
pub fn compute_error_response(err: ComputeError) -> HandlerError {
    let (status, code) = match &err {
        ComputeError::InvalidParameters(_) => (StatusCode::BAD_REQUEST, "INVALID_PARAMETERS"),
        ComputeError::MalformedInput(_) => (StatusCode::UNPROCESSABLE_ENTITY, "MALFORMED_INPUT"),
        ComputeError::HistoricalData(_) => (StatusCode::BAD_GATEWAY, "HISTORICAL_DATA_ERROR"),
        ComputeError::DataFrame(_) | ComputeError::Series(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "COMPUTE_ERROR")
        }
    };

    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    (status, Json(ErrorResponse::new(err.to_string(), code)))
}
