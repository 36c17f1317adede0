use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod commands;

use commands::{forecast, serve, watch};

use crate::config::Settings;
use crate::schemas::ForecastQuery;

#[derive(Parser)]
#[command(name = "pathway")]
#[command(about = "Emissions pathway forecaster with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Forecast the emissions pathway of an entity and print it
    Forecast {
        /// Entity whose history is forecast
        #[arg(short, long, default_value = "test_portfolio_id")]
        entity_id: String,

        #[command(flatten)]
        parameters: ParameterArgs,

        /// Year the simulation starts at (defaults to the current year)
        #[arg(long)]
        current_year: Option<i32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Recompute the forecast whenever parameter edits settle
    ///
    /// Edits are read from stdin, one `name=value` per line, e.g.
    /// `targetYear=2040` or `offset_rate_percent=20`.
    Watch {
        /// Entity whose history is forecast
        #[arg(short, long, default_value = "test_portfolio_id")]
        entity_id: String,

        #[command(flatten)]
        parameters: ParameterArgs,

        /// Year the simulation starts at (defaults to the current year)
        #[arg(long)]
        current_year: Option<i32>,

        /// Quiet period in milliseconds before edits are recomputed
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

/// Forecast parameters as command line flags
#[derive(Args, Debug, Clone)]
pub struct ParameterArgs {
    /// First year included in the historical restatement
    #[arg(long, default_value_t = 2019)]
    pub baseline_year: i32,
    /// Year by which the reduction target should be reached
    #[arg(long, default_value_t = 2030)]
    pub target_year: i32,
    /// Emissions reduction to reach by the target year, in percent
    #[arg(long, default_value_t = 50.0)]
    pub reduction_target: f64,
    /// Yearly activity growth, in percent
    #[arg(long, default_value_t = 5.0)]
    pub activity_growth: f64,
    /// Yearly emissions offset rate, in percent
    #[arg(long, default_value_t = 15.0)]
    pub offset_rate: f64,
}

impl From<ParameterArgs> for ForecastQuery {
    fn from(args: ParameterArgs) -> Self {
        Self {
            baseline_year: args.baseline_year,
            target_year: args.target_year,
            reduction_target_percent: args.reduction_target,
            activity_growth_percent: args.activity_growth,
            offset_rate_percent: args.offset_rate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Csv,
}

impl Cli {
    pub async fn run(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                let bind_address = bind_address.unwrap_or_else(|| settings.bind_address.clone());
                serve(&settings, &bind_address).await?;
            }
            Commands::Forecast {
                entity_id,
                parameters,
                current_year,
                format,
            } => {
                let current_year = current_year.or(settings.current_year);
                forecast(&settings, &entity_id, parameters.into(), current_year, format).await?;
            }
            Commands::Watch {
                entity_id,
                parameters,
                current_year,
                debounce_ms,
            } => {
                let current_year = current_year.or(settings.current_year);
                let debounce = debounce_ms
                    .map(std::time::Duration::from_millis)
                    .unwrap_or_else(|| settings.debounce_period());
                watch(&settings, &entity_id, parameters.into(), current_year, debounce).await?;
            }
        }
        Ok(())
    }
}
