//! alertfreq CLI
//!
//! Queries the search backend for prior occurrences of an alert and prints
//! the frequency sentence, suitable for embedding in a notification.

use clap::Parser;
use std::process::ExitCode;
use tracing::warn;

use alertfreq::{AlertFrequencyReporter, FrequencyOptions, SearchConfig};

/// alertfreq - historical alert-frequency lookup
#[derive(Parser)]
#[command(name = "alertfreq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host the alert fired on (e.g. web0200.ny4)
    hostname: String,

    /// Service the alert fired for; omit for host-level (DOWN) alerts
    #[arg(short, long)]
    service: Option<String>,

    /// Days of history to search
    #[arg(short, long, default_value = "7")]
    duration: u32,

    /// Maximum number of raw rows to request
    #[arg(long, default_value = "10000")]
    max_results: u32,

    /// End of the search window ("now" or an explicit timestamp)
    #[arg(long, default_value = "now")]
    latest_time: String,

    /// Search endpoint URL
    #[arg(long, env = "SPLUNK_URL")]
    url: String,

    /// Username authorized to run searches
    #[arg(long, env = "SPLUNK_USERNAME")]
    username: String,

    /// Password for the search user
    #[arg(long, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    password: String,

    /// Skip TLS certificate validation (self-signed internal backends only)
    #[arg(long)]
    insecure: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SearchConfig {
        url: cli.url,
        username: cli.username,
        password: cli.password,
        accept_invalid_certs: cli.insecure,
        ..SearchConfig::default()
    };

    let reporter = AlertFrequencyReporter::new(&config)?;

    let options = FrequencyOptions {
        duration_days: cli.duration,
        max_results: cli.max_results,
        latest_time: cli.latest_time,
    };

    match reporter
        .alert_frequency(&cli.hostname, cli.service.as_deref(), &options)
        .await?
    {
        Some(report) => println!("{report}"),
        None => {
            warn!("No historical alert data available");
            println!("no historical alert data available");
        }
    }

    Ok(())
}
