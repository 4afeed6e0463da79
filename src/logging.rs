// src/logging.rs
// =============================================================================
// Logger setup.
//
// Logs go to stderr through env_logger. stdout is reserved for the one line
// per request that the workers print.
// =============================================================================

use crate::config::ScanConfig;
use log::{debug, info, LevelFilter};

/// Initialize the logger
///
/// Defaults to warnings only (transport failures, shutdown), or debug with
/// -v. RUST_LOG still overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {:?}", level);
}

/// Log the validated configuration
pub fn log_config(config: &ScanConfig) {
    let timeout = match config.timeout {
        Some(timeout) => format!("{}s", timeout.as_secs()),
        None => "none".to_string(),
    };

    info!(
        "Configuration: url={}, wordlist={}, workers={}, timeout={}",
        config.base_url,
        config.wordlist.display(),
        config.workers,
        timeout
    );
    if let Some(output) = &config.output {
        info!("Results will be written to {}", output.display());
    }
}
