use anyhow::Result;
use compute::history::{FixtureHistorySource, HistoryCacheSource};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Application settings.
///
/// Sources in increasing priority: built-in defaults, an optional
/// `pathway.{toml,yaml,json}` file in the working directory, then `PATHWAY_*`
/// environment variables (a `.env` file is loaded first).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Bind address for the web server
    pub bind_address: String,
    /// Maximum number of entities kept in the history cache
    pub history_cache_size: usize,
    /// Time to live of cached history, in seconds
    pub history_cache_ttl_secs: u64,
    /// Quiet period before a burst of parameter edits is recomputed, in milliseconds
    pub debounce_ms: u64,
    /// Pins the year the simulation starts at; the system clock is used when unset
    pub current_year: Option<i32>,
}

impl Settings {
    /// Load settings from defaults, the optional config file and the environment
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = ::config::Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("history_cache_size", 100_i64)?
            .set_default("history_cache_ttl_secs", 300_i64)?
            .set_default("debounce_ms", 1000_i64)?
            .add_source(::config::File::with_name("pathway").required(false))
            .add_source(::config::Environment::with_prefix("PATHWAY"))
            .build()?
            .try_deserialize::<Settings>()?;

        if settings.history_cache_size == 0 {
            anyhow::bail!("history_cache_size must be at least 1");
        }

        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    pub fn history_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.history_cache_ttl_secs)
    }

    pub fn debounce_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: &Settings) -> AppState {
    info!(
        "Initializing history cache: {} entities, TTL {:?}",
        settings.history_cache_size,
        settings.history_cache_ttl()
    );
    let history = HistoryCacheSource::new(
        FixtureHistorySource::default(),
        settings.history_cache_size,
        settings.history_cache_ttl(),
    );

    AppState {
        history: Arc::new(history),
        current_year: settings.current_year,
    }
}
