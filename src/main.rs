//! `tira` - interactive issue tracker
//!
//! Reads commands from stdin one line at a time and keeps every issue in a
//! single JSONL snapshot file.

use tira::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
