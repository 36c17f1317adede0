use anyhow::{anyhow, Context, Result};
use common::ForecastParameters;
use compute::debounce::Debouncer;
use compute::{parse_history, HistoricalDataSource};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};
use validator::Validate;

use crate::config::{initialize_app_state, Settings};
use crate::schemas::ForecastQuery;

/// Applies one `name=value` edit to the query.
///
/// Names are accepted in camelCase or snake_case.
pub fn apply_edit(query: &mut ForecastQuery, edit: &str) -> Result<()> {
    let (name, value) = edit
        .split_once('=')
        .ok_or_else(|| anyhow!("expected name=value, got '{}'", edit))?;
    let name = name.trim();
    let value = value.trim();

    let parse_year = |v: &str| v.parse::<i32>().with_context(|| format!("'{}' is not a year", v));
    let parse_percent =
        |v: &str| v.parse::<f64>().with_context(|| format!("'{}' is not a percentage", v));

    match name {
        "baselineYear" | "baseline_year" => query.baseline_year = parse_year(value)?,
        "targetYear" | "target_year" => query.target_year = parse_year(value)?,
        "reductionTargetPercent" | "reduction_target_percent" => {
            query.reduction_target_percent = parse_percent(value)?
        }
        "activityGrowthPercent" | "activity_growth_percent" => {
            query.activity_growth_percent = parse_percent(value)?
        }
        "offsetRatePercent" | "offset_rate_percent" => {
            query.offset_rate_percent = parse_percent(value)?
        }
        other => return Err(anyhow!("unknown parameter '{}'", other)),
    }
    Ok(())
}

pub async fn watch(
    settings: &Settings,
    entity_id: &str,
    query: ForecastQuery,
    current_year: Option<i32>,
    quiet_period: Duration,
) -> Result<()> {
    trace!("Entering watch command");
    query.validate().context("Invalid forecast parameters")?;

    let mut state = initialize_app_state(settings);
    state.current_year = current_year;
    let engine = state.engine();

    let raw = state
        .history
        .fetch_history(entity_id, query.baseline_year)
        .await
        .with_context(|| format!("Failed to fetch history of entity {}", entity_id))?;
    let history = parse_history(&raw)?;
    info!(
        "Watching entity {} ({} records), quiet period {:?}",
        entity_id,
        history.len(),
        quiet_period
    );

    let (tx, rx) = mpsc::channel::<ForecastQuery>(32);
    tx.send(query.clone()).await?;

    let reader = tokio::spawn(async move {
        let mut current = query;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut edited = current.clone();
            if let Err(e) = apply_edit(&mut edited, line) {
                warn!("Ignoring edit: {}", e);
                continue;
            }
            if let Err(e) = edited.validate() {
                warn!("Ignoring edit '{}': {}", line, e);
                continue;
            }

            debug!("Accepted edit '{}'", line);
            current = edited;
            if tx.send(current.clone()).await.is_err() {
                break;
            }
        }
        trace!("Input closed");
    });

    Debouncer::new(quiet_period)
        .run(rx, |settled| {
            let params = ForecastParameters::from(settled);
            match engine.forecast(&history, &params) {
                Ok(result) => println!(
                    "{}-{}: {} rows, total offset {:.3}, cost {:.2}",
                    params.baseline_year,
                    params.target_year,
                    result.series.len(),
                    result.total_carbon_offset,
                    result.cost_per_year
                ),
                Err(e) => warn!("Forecast failed: {}", e),
            }
        })
        .await;

    reader.await?;
    info!("Watch finished");
    Ok(())
}
