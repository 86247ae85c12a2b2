use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use aqi_advisor::{AdvisorConfig, AdvisorError, AdvisorPipeline, UserContext, logging};

const DEFAULT_QUESTION: &str = "What's Chennai AQI right now and can I run at 6am?";

/// Air quality advisor: current readings, trend and advice for a location
#[derive(Debug, Parser)]
#[command(name = "aqi-advisor", version, about)]
struct Cli {
    /// Question to answer
    #[arg(default_value = DEFAULT_QUESTION)]
    query: String,

    /// Location to look up (defaults to the configured location)
    #[arg(short, long)]
    location: Option<String>,

    /// User identifier recorded with the request
    #[arg(long, default_value = "dharshaa")]
    user_id: String,

    /// Add advice for people with asthma
    #[arg(long)]
    asthma: bool,

    /// Sample data CSV file
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Skip the search stub and answer from sample data only
    #[arg(long)]
    no_search: bool,

    /// Configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AdvisorConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    if let Some(path) = &cli.data {
        config.data.sample_csv = path.display().to_string();
    }
    if cli.no_search {
        config.search.enabled = false;
    }

    logging::init(&config.logging, cli.verbose)?;
    debug!(?config, "configuration loaded");

    let context = UserContext {
        location: cli.location.clone(),
        user_id: Some(cli.user_id.clone()),
        ..UserContext::default()
    }
    .with_asthma(cli.asthma);

    let mut pipeline = AdvisorPipeline::new(&config);
    match pipeline.run(&cli.query, &context) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ AdvisorError::DataUnavailable) => {
            error!(error = %e, "no reading available");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
