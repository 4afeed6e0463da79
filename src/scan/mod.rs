// src/scan/mod.rs
// =============================================================================
// This module contains the concurrent probing pipeline.
//
// Submodules:
// - result: RequestResult and ScanSummary, the data a scan produces
// - worker: The per-worker loop and the single HTTP request it makes
// - collector: The task that owns the result collection
// - pool: The coordinator that starts everything and waits for it to finish
// =============================================================================

mod collector;
mod pool;
mod result;
mod worker;

pub use pool::run_scan;
pub use result::RequestResult;
