// src/report/mod.rs
// =============================================================================
// This module is the output side of a scan.
//
// - Console: one line per completed request, printed by the worker that made it
// - File: the full result set as a JSON array, written once the scan is done
// =============================================================================

mod output;

pub use output::{format_line, print_line, write_json};
