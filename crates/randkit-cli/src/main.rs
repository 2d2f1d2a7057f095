//! randkit sampling harness entry point.

use std::error::Error;
use std::io::Write;

use randkit_cli::{SampleConfig, SystemClock};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so the report can be piped from stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting randkit sampler");

    // Read configuration from environment.
    let config = SampleConfig::from_env()?;

    let report = randkit_cli::run(&config, &SystemClock)?;
    let rendered = report.render(config.format)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
