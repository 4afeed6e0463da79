// src/wordlist/loader.rs
// =============================================================================
// Reads a newline-delimited wordlist.
//
// Words are kept exactly as they appear: no trimming, no deduplication, no
// skipping of blank lines. A file ending in '\n' therefore yields a final
// empty word, which probes `<base>/`.
// =============================================================================

use crate::error::ProbeError;
use log::debug;
use std::path::Path;

/// Reads the whole file and splits it into words
///
/// Invalid UTF-8 is replaced rather than rejected, so a wordlist with a few
/// stray bytes still loads.
pub async fn load_wordlist(path: &Path) -> Result<Vec<String>, ProbeError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ProbeError::Wordlist {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_wordlist(&String::from_utf8_lossy(&bytes));
    debug!("Loaded {} word(s) from {}", words.len(), path.display());
    Ok(words)
}

/// Splits wordlist content on '\n', keeping every entry as-is
pub fn parse_wordlist(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}
