// file: src/main.rs
// version: 2.0.0
// guid: 0e2a4c6f-8b1d-4f3a-a5c7-9e1b3d5f7a90

//! hammer-dispatch - Main entry point

use clap::Parser;
use hammer_dispatch::{cli, logging::logger};
use tokio::signal;
use tracing::{error, warn};

/// Exit code for an interrupted run (128 + SIGINT)
const INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose, cli.quiet)?;
    } else {
        logger::init_logger(cli.verbose, cli.quiet)?;
    }

    let shutdown_signal = async {
        if signal::ctrl_c().await.is_err() {
            // no handler available, never resolve
            std::future::pending::<()>().await;
        }
        warn!("Received Ctrl+C, abandoning hammer invocation");
    };

    let code = tokio::select! {
        result = cli::dispatch(cli) => match result {
            Ok(code) => code,
            Err(e) => {
                error!("{}", e);
                eprintln!("Error: {}", e);
                e.exit_code()
            }
        },
        _ = shutdown_signal => INTERRUPTED,
    };

    std::process::exit(code);
}
