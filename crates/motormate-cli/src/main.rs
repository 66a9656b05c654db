//! Main entry point for the MotorMate command line client.

mod cli;
mod commands;

use clap::Parser;
use motormate_store::{Settings, init_logging};
use tracing::error;

use crate::cli::Cli;
use crate::commands::Runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&settings.log)?;

    let runner = Runner::new(settings);
    let result = runner.run(cli.command).await;
    runner.flush_notifications();

    if let Err(e) = &result {
        error!("command failed: {:#}", e);
    }
    result
}
