// src/report/output.rs
// =============================================================================
// Console and JSON output for scan results.
//
// Console lines go to stdout and look like:
//   http://example.com/admin 200 1234
//
// Logs go to stderr, so stdout can be piped into other tools untouched.
// =============================================================================

use crate::error::ProbeError;
use crate::scan::RequestResult;
use log::info;
use std::io::{self, Write};
use std::path::Path;

/// Formats a result as `<full-url> <statusCode> <contentLength>`
pub fn format_line(result: &RequestResult) -> String {
    format!(
        "{} {} {}",
        result.target(),
        result.status_code,
        result.content_length
    )
}

/// Prints one progress line to stdout
///
/// The stdout lock is held for the whole line, so lines from concurrent
/// workers never interleave. Unlike println!, a closed stdout (e.g. piped
/// into `head`) comes back as an error instead of a panic.
pub fn print_line(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)
}

/// Writes every result to `path` as a pretty-printed JSON array
pub async fn write_json(results: &[RequestResult], path: &Path) -> Result<(), ProbeError> {
    let json = serde_json::to_string_pretty(results)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| ProbeError::Output {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Wrote {} result(s) to {}", results.len(), path.display());
    Ok(())
}
