// src/scan/result.rs
// =============================================================================
// The data produced by a scan.
//
// A RequestResult is created once by a worker, moved into the collector
// over a channel, and never changed afterwards.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The outcome of probing one word
///
/// Serialized with the field names `url`, `path`, `statusCode` and
/// `contentLength`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResult {
    /// Base URL the word was appended to
    pub url: String,
    /// The word itself
    pub path: String,
    /// HTTP status, or 0 when no response was received
    pub status_code: u16,
    /// Body length in bytes, or 0 when unknown
    pub content_length: u64,
}

impl RequestResult {
    pub fn new(url: &str, path: &str, status_code: u16, content_length: u64) -> Self {
        RequestResult {
            url: url.to_string(),
            path: path.to_string(),
            status_code,
            content_length,
        }
    }

    /// Zero-value result for a request that never got a response
    pub fn failed(url: &str, path: &str) -> Self {
        RequestResult::new(url, path, 0, 0)
    }

    pub fn is_failure(&self) -> bool {
        self.status_code == 0
    }

    /// The full URL that was requested
    pub fn target(&self) -> String {
        format!("{}/{}", self.url, self.path)
    }
}

/// Everything a finished (or interrupted) scan hands back to main
#[derive(Debug)]
pub struct ScanSummary {
    /// One entry per dispatched word, in completion order
    pub results: Vec<RequestResult>,
    /// How many words the producer put on the queue
    pub dispatched: usize,
    /// True when a shutdown stopped dispatch before the wordlist ran out
    pub interrupted: bool,
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }
}
