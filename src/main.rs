// file: src/main.rs
// version: 1.0.0
// guid: 72e0c5a9-3db8-4f14-a6c2-85b91d04e7f3

//! iDRAC MAAS Prep - Main entry point

use clap::Parser;
use idrac_maas_prep::{
    cli::{args::{Cli, Commands}, commands},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting; the output file keeps the records written so far");
    };

    let command_future = async {
        match cli.command {
            Commands::Provision {
                output,
                settings_file,
                dry_run,
            } => commands::provision_command(&output, &settings_file, dry_run).await,
            Commands::Validate { settings_file } => {
                commands::validate_command(&settings_file).await
            }
        }
    };

    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
