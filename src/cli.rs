// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Note: -u and -w are required, but they are declared as Option<String>.
// clap would reject a missing required argument with its own message and
// exit code 2. We want our own messages (one per missing flag) and exit
// code 1, so the check happens in config.rs instead.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

/// Default number of concurrent workers
pub const DEFAULT_THREADS: usize = 30;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "pathprobe",
    version = "0.1.0",
    about = "Probe a web server for paths listed in a wordlist",
    long_about = "pathprobe requests <URL>/<word> for every word in a wordlist, using a pool of \
                  concurrent workers, and prints the status code and body length of each response. \
                  Results can also be written to a JSON file."
)]
pub struct Cli {
    /// Target base URL, without a trailing slash (e.g., https://example.com)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Path to a newline-delimited wordlist file
    #[arg(short = 'w', long = "wordlist", value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(short = 't', long = "threads", value_name = "N", default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Write all results to this file as a JSON array
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print debug logs to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> for a required flag?
//    - clap's own "required" check would exit with code 2 and its own text
//    - Option lets us decide what "missing" means and what to print
//
// 2. short = 'u' vs long = "url"
//    - short gives -u, long gives --url; both map to the same field
// -----------------------------------------------------------------------------
