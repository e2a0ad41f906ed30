use crate::config::{LogFormat, ObservabilityConfig};
use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Resolve the configured level, falling back to `INFO` for unknown strings.
pub fn max_level(config: &ObservabilityConfig) -> Level {
    config.log_level.parse().unwrap_or(Level::INFO)
}

/// Install the process-wide `tracing` subscriber. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(max_level(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.log_format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Compact => tracing::subscriber::set_global_default(builder.compact().finish()),
    }
    .context("setting default subscriber failed")
}
