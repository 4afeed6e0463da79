// src/scan/worker.rs
// =============================================================================
// One worker = one loop that takes a word, requests it, and reports it.
//
// Worker states:
//   Idle -> Requesting -> (Success | Failed) -> Idle -> ...
//   ... until the queue is closed and empty -> Terminated
//
// A failed request never stops a worker. Whatever happens, every word a
// worker takes off the queue produces exactly one RequestResult.
// =============================================================================

use super::result::RequestResult;
use crate::report;
use log::{debug, warn};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

// Runs until the word queue is closed and drained
//
// Returns how many words this worker handled.
pub(crate) async fn worker_loop(
    worker_id: usize,
    client: Client,
    base_url: Arc<str>,
    words: async_channel::Receiver<String>,
    results: UnboundedSender<RequestResult>,
) -> usize {
    debug!("Worker {} starting", worker_id);
    let mut handled = 0;
    let mut printing = true;

    // recv() fails only once the channel is closed AND empty
    while let Ok(word) = words.recv().await {
        let result = probe(&client, &base_url, &word).await;
        let line = report::format_line(&result);

        if results.send(result).is_err() {
            // Collector is gone; nothing we produce can be recorded anymore
            warn!("Worker {}: result collector closed, stopping", worker_id);
            break;
        }
        handled += 1;

        // A closed stdout only costs the progress lines, never the scan
        if printing {
            if let Err(e) = report::print_line(&line) {
                debug!("Worker {}: stdout closed, no more progress lines: {}", worker_id, e);
                printing = false;
            }
        }
    }

    debug!("Worker {} finished after {} request(s)", worker_id, handled);
    handled
}

// Requests `base_url/word` once and turns the outcome into a RequestResult
pub(crate) async fn probe(client: &Client, base_url: &str, word: &str) -> RequestResult {
    let target = format!("{}/{}", base_url, word);

    match client.get(&target).send().await {
        Ok(response) => {
            let status = response.status().as_u16();

            // An unreadable body is reported as empty, not as a failure
            let content_length = match response.bytes().await {
                Ok(body) => body.len() as u64,
                Err(e) => {
                    debug!("{}: could not read body: {}", target, e);
                    0
                }
            };

            RequestResult::new(base_url, word, status, content_length)
        }
        Err(e) => {
            warn!("{}: {}", target, describe_error(&e));
            RequestResult::failed(base_url, word)
        }
    }
}

// Short human-readable reason for a transport error
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure or refused connection
// - Too many redirects
// - A word that makes the URL unparseable
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error.is_builder() {
        format!("invalid URL: {}", error_string)
    } else {
        error_string
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does probe() return RequestResult and not Result<RequestResult, _>?
//    - A failed request is an expected outcome, not a reason to stop
//    - Returning the zero-value result keeps "one word in, one result out"
//      true for every word, success or not
//
// 2. Why write to stdout with writeln! instead of println!?
//    - println! panics if stdout is closed (e.g. `pathprobe ... | head -1`)
//    - A panic inside a spawned task would fail the whole scan
//    - writeln! hands back an io::Error we can simply stop caring about
//
// 3. What is Arc<str>?
//    - A reference-counted, immutable string slice
//    - Every worker needs the base URL; cloning an Arc only bumps a counter
// -----------------------------------------------------------------------------
