use crate::handlers::{
    forecast::{get_chart_data, get_forecast},
    health::health_check,
    history::{get_history, invalidate_history},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Forecast routes
        .route("/api/v1/entities/:entity_id/forecast", get(get_forecast))
        .route("/api/v1/entities/:entity_id/chart-data", get(get_chart_data))
        // History routes
        .route("/api/v1/entities/:entity_id/history", get(get_history))
        .route(
            "/api/v1/entities/:entity_id/history/cache",
            delete(invalidate_history),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
