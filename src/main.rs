use anyhow::{Context, Result};
use clap::Parser;
use job_skills::cli::{handle_command, Cli, Outcome};
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file so stdout only carries command output
    let log_path = std::env::var("JOBSKILLS_LOG").unwrap_or_else(|_| "/tmp/jobskills.log".to_string());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(
        "Starting jobskills, environment: {}",
        std::env::var("JOBSKILLS_ENV").unwrap_or_else(|_| "local".to_string())
    );

    match handle_command(cli).await? {
        Outcome::Printed => Ok(()),
        Outcome::NotFound(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    }
}
