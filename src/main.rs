// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them (missing -u / -w stops here, before any request)
// 3. Load the wordlist and run the concurrent scan
// 4. Write the JSON output file if -o was given
// 5. Exit with proper code (0 = done, 1 = configuration error, 2 = other error)
// =============================================================================

mod cli;
mod config;
mod error;
mod logging;
mod report;
mod scan;
mod wordlist;

use clap::Parser;
use cli::Cli;
use config::ScanConfig;
use error::ProbeError;

use anyhow::Result;
use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e.downcast_ref::<ProbeError>() {
                Some(probe_error) if probe_error.is_config_error() => 1,
                _ => 2,
            }
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = scan finished (or was interrupted and drained)
//   Ok(1) = required flags missing
//   Err   = anything else that stopped the run
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = match ScanConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(ProbeError::MissingFlags(flags)) => {
            for flag in flags {
                eprintln!("{}", flag);
            }
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };
    logging::log_config(&config);

    let words = wordlist::load_wordlist(&config.wordlist).await?;

    let shutdown = Arc::new(AtomicBool::new(false));
    spawn_shutdown_listener(Arc::clone(&shutdown));

    let summary = scan::run_scan(&config, words, shutdown).await?;
    if summary.interrupted {
        warn!(
            "Scan interrupted after {} of the wordlist's words were dispatched",
            summary.dispatched
        );
    }

    if let Some(output) = &config.output {
        // Console lines are already out; a failed write only costs the file
        if let Err(e) = report::write_json(&summary.results, output).await {
            eprintln!("Warning: {}", e);
        }
    }

    Ok(0)
}

// First Ctrl-C: stop dispatching and let in-flight requests drain.
// Second Ctrl-C: give up immediately.
fn spawn_shutdown_listener(shutdown: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        warn!("Ctrl-C received, finishing in-flight requests (press again to abort)");
        shutdown.store(true, Ordering::Relaxed);

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does run() return Result<i32> instead of calling exit() itself?
//    - std::process::exit() skips destructors
//    - Keeping it in main() means everything in run() is dropped first
//
// 2. What is e.downcast_ref::<ProbeError>()?
//    - anyhow::Error can hold any error type
//    - downcast_ref peeks inside to see if it is one of ours, so we can pick
//      exit code 1 (configuration) or 2 (everything else)
//
// 3. Why Arc<AtomicBool> for shutdown?
//    - The Ctrl-C task writes it and the producer task reads it
//    - An atomic needs no lock, and Arc lets both tasks own a handle
// -----------------------------------------------------------------------------
