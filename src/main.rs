#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use anyhow::Result;
use asca::cli::Cli;
use asca::{Config, app, observability};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load_or_init()?;

    // Initialize logging
    observability::init_tracing(&config.observability)?;

    app::dispatch(cli, config).await
}
