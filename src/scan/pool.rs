// src/scan/pool.rs
// =============================================================================
// The coordinator: wires the producer, the workers and the collector together.
//
//   wordlist --> [producer] --> word queue --> [worker x N] --> [collector]
//                                (async_channel)            (mpsc)
//
// 1. The producer pushes every word onto a bounded queue, then closes it
// 2. N workers pull words until the queue is closed and empty
// 3. Each worker sends its results to the collector task
// 4. Once every worker has finished, the collector returns all results
//
// Only the completion barrier is ordered. Results arrive in whatever order
// the requests finish.
// =============================================================================

use super::collector::collect_results;
use super::result::ScanSummary;
use super::worker::worker_loop;
use crate::config::ScanConfig;
use crate::error::ProbeError;
use futures::future::join_all;
use log::{debug, info, warn};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

// What the producer reports back once it stops
struct Dispatch {
    sent: usize,
    interrupted: bool,
}

/// Probes every word against the configured base URL
///
/// `shutdown` can be raised at any time (e.g. from a Ctrl-C handler). The
/// producer then stops queueing new words; words already queued or in flight
/// still complete, so every dispatched word still yields a result.
pub async fn run_scan(
    config: &ScanConfig,
    words: Vec<String>,
    shutdown: Arc<AtomicBool>,
) -> Result<ScanSummary, ProbeError> {
    let start = Instant::now();
    let client = build_client(config.timeout)?;
    let workers = config.workers.max(1);

    info!(
        "Probing {} word(s) against {} with {} worker(s)",
        words.len(),
        config.base_url,
        workers
    );

    // Small buffer: the producer stays just ahead of the workers
    let (word_tx, word_rx) = async_channel::bounded::<String>(workers * 2);
    let (result_tx, result_rx) = mpsc::unbounded_channel();

    let collector = tokio::spawn(collect_results(result_rx));
    let producer = tokio::spawn(produce_words(words, word_tx, shutdown));

    let base_url: Arc<str> = Arc::from(config.base_url.as_str());
    let mut worker_handles = Vec::with_capacity(workers);
    for worker_id in 0..workers {
        worker_handles.push(tokio::spawn(worker_loop(
            worker_id,
            client.clone(),
            Arc::clone(&base_url),
            word_rx.clone(),
            result_tx.clone(),
        )));
    }

    // Only the workers hold these now; the collector stops when they drop theirs
    drop(word_rx);
    drop(result_tx);

    let dispatch = producer.await?;

    // Barrier: every worker has drained the queue
    let mut handled = 0;
    for handle in join_all(worker_handles).await {
        handled += handle?;
    }

    let results = collector.await?;
    if results.len() != dispatch.sent {
        warn!(
            "{} word(s) dispatched but {} result(s) collected",
            dispatch.sent,
            results.len()
        );
    }
    debug!("Workers handled {} word(s)", handled);

    let summary = ScanSummary {
        results,
        dispatched: dispatch.sent,
        interrupted: dispatch.interrupted,
        elapsed: start.elapsed(),
    };

    info!(
        "Scan complete: {} result(s), {} failed, {:.2}s",
        summary.total(),
        summary.failures(),
        summary.elapsed.as_secs_f64()
    );
    Ok(summary)
}

// One shared client for every worker
//
// Client is cheap to clone (it's a reference counter internally) and keeps
// a connection pool that all workers share.
fn build_client(timeout: Option<Duration>) -> Result<Client, ProbeError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

// Pushes words until the list runs out or a shutdown is requested
//
// Dropping `words_tx` on return closes the queue.
async fn produce_words(
    words: Vec<String>,
    words_tx: async_channel::Sender<String>,
    shutdown: Arc<AtomicBool>,
) -> Dispatch {
    let mut sent = 0;

    for word in words {
        if shutdown.load(Ordering::Relaxed) {
            warn!("Shutdown requested, no new words will be dispatched");
            return Dispatch {
                sent,
                interrupted: true,
            };
        }

        if words_tx.send(word).await.is_err() {
            // Every worker is gone
            break;
        }
        sent += 1;
    }

    Dispatch {
        sent,
        interrupted: false,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why async_channel instead of tokio::sync::mpsc for the words?
//    - tokio's mpsc has exactly one receiver
//    - async_channel receivers can be cloned, so every worker pulls from the
//      same queue and each word still goes to exactly one of them
//
// 2. Why drop(word_rx) and drop(result_tx) in run_scan?
//    - A channel only closes when every handle on one side is gone
//    - If we kept our copies, the collector would wait forever
//
// 3. What does handle? do on a JoinHandle result?
//    - tokio::spawn returns a JoinHandle; awaiting it gives Result<T, JoinError>
//    - JoinError means the task panicked, and `?` turns it into ProbeError::Task
// -----------------------------------------------------------------------------
