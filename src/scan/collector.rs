// src/scan/collector.rs
// =============================================================================
// The result collector: the only owner of the result Vec.
//
// Workers never touch the Vec. They send each RequestResult over a channel
// and this task appends it, so there is exactly one writer and no lock.
// =============================================================================

use super::result::RequestResult;
use log::debug;
use tokio::sync::mpsc::UnboundedReceiver;

// Appends results until every sender has been dropped, then hands the Vec back
pub(crate) async fn collect_results(mut results: UnboundedReceiver<RequestResult>) -> Vec<RequestResult> {
    let mut collected = Vec::new();

    while let Some(result) = results.recv().await {
        collected.push(result);
    }

    debug!("Collector finished with {} result(s)", collected.len());
    collected
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a task instead of Arc<Mutex<Vec<_>>>?
//    - Only one piece of code ever owns the Vec, so no lock is needed
//    - Workers give their results away (move them into the channel) instead
//      of sharing a collection
// -----------------------------------------------------------------------------
