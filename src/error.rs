// src/error.rs
// =============================================================================
// Error types for pathprobe.
//
// Only errors that stop (or partly stop) a run live here. A failed HTTP
// request is NOT an error at this level: the worker records it as a
// zero-value RequestResult and moves on to the next word.
//
// Rust concepts:
// - thiserror: Derives Display and std::error::Error from attributes
// - #[from]: Generates From impls so `?` converts errors automatically
// =============================================================================

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A required command-line flag that was not given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFlag {
    /// -u, the target base URL
    Url,
    /// -w, the wordlist path
    Wordlist,
}

impl fmt::Display for MissingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingFlag::Url => write!(f, "-u (target URL) flag must be specified"),
            MissingFlag::Wordlist => write!(f, "-w (wordlist) flag must be specified"),
        }
    }
}

/// Top-level error type for a probe run
#[derive(Error, Debug)]
pub enum ProbeError {
    /// One or more required flags are missing
    #[error("{}", join_lines(.0))]
    MissingFlags(Vec<MissingFlag>),

    /// A flag was given but its value is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The wordlist file could not be read
    #[error("Could not read wordlist '{}': {source}", .path.display())]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shared HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The results could not be encoded as JSON
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written
    #[error("Could not write output file '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pipeline task panicked or was aborted
    #[error("Pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ProbeError {
    /// Configuration errors stop the run before any request is made
    ///
    /// main exits 1 for these and 2 for everything else.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ProbeError::MissingFlags(_) | ProbeError::InvalidConfig(_) | ProbeError::Wordlist { .. }
        )
    }
}

fn join_lines(flags: &[MissingFlag]) -> String {
    flags
        .iter()
        .map(|flag| flag.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
