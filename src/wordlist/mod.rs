// src/wordlist/mod.rs
// =============================================================================
// This module turns a wordlist file into the list of paths to probe.
//
// Submodules:
// - loader: Reads the file and splits it into words
// =============================================================================

mod loader;

pub use loader::load_wordlist;
