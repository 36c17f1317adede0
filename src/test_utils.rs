#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use common::RawEmissionsRecord;
    use compute::history::{FixtureHistorySource, HistoryCacheSource};
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Year the simulation starts at in every test
    pub const TEST_CURRENT_YEAR: i32 = 2024;

    /// Fixture serving the two-year default history, plus an entity without
    /// history and one whose year label cannot be parsed
    pub fn test_history_source() -> FixtureHistorySource {
        FixtureHistorySource::default()
            .with_entity("empty", vec![])
            .with_entity("malformed", vec![RawEmissionsRecord::new("20x9", 500.0)])
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        AppState {
            history: Arc::new(HistoryCacheSource::with_defaults(test_history_source())),
            current_year: Some(TEST_CURRENT_YEAR),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. The subscriber is installed globally
    /// once, so it also covers tasks spawned by the test server.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        // another test may have installed it already
        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        init_test_tracing();

        create_router(setup_test_app_state())
    }

    #[test]
    fn test_tracing_is_installed_globally() {
        init_test_tracing();
        init_test_tracing();

        assert!(tracing::dispatcher::has_been_set());
    }
}
