// src/config.rs
// =============================================================================
// Turns the parsed command line into a validated ScanConfig.
//
// Every check here runs before the wordlist is read and before any HTTP
// request is made, so a bad invocation never touches the network.
// =============================================================================

use crate::cli::Cli;
use crate::error::{MissingFlag, ProbeError};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Everything a scan needs, already validated
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Base URL exactly as given; targets are `base_url + "/" + word`
    pub base_url: String,
    pub wordlist: PathBuf,
    pub workers: usize,
    pub output: Option<PathBuf>,
    /// None means no per-request deadline
    pub timeout: Option<Duration>,
}

impl ScanConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ProbeError> {
        let url = cli.url.as_deref().filter(|u| !u.is_empty());
        let wordlist = cli.wordlist.as_ref().filter(|w| !w.as_os_str().is_empty());

        // Report every missing flag, not just the first one
        let mut missing = Vec::new();
        if url.is_none() {
            missing.push(MissingFlag::Url);
        }
        if wordlist.is_none() {
            missing.push(MissingFlag::Wordlist);
        }

        let (base_url, wordlist) = match (url, wordlist) {
            (Some(url), Some(wordlist)) => (url.to_string(), wordlist.clone()),
            _ => return Err(ProbeError::MissingFlags(missing)),
        };

        validate_base_url(&base_url)?;

        if cli.threads == 0 {
            return Err(ProbeError::InvalidConfig(
                "-t (threads) must be at least 1".to_string(),
            ));
        }

        let timeout = match cli.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(ScanConfig {
            base_url,
            wordlist,
            workers: cli.threads,
            output: cli.output.clone(),
            timeout,
        })
    }
}

// The raw string is still what gets concatenated with each word; parsing
// only rejects values reqwest could never request.
fn validate_base_url(base_url: &str) -> Result<(), ProbeError> {
    let parsed = Url::parse(base_url)
        .map_err(|e| ProbeError::InvalidConfig(format!("invalid URL '{}': {}", base_url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ProbeError::InvalidConfig(format!(
            "unsupported URL scheme '{}' in '{}'",
            other, base_url
        ))),
    }
}
