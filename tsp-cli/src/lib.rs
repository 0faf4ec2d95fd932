//! A library which contains the rendering side of TSP plotting tools: styles, an svg canvas and
//! plot operations over data read by `tsp-format`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub use tsp_format as format;

pub mod extensions;

use std::sync::Arc;

/// A logger which receives informational messages, e.g. amount of read points or tour length.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Specifies where informational messages go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Messages are printed to stdout.
    Stdout,
    /// Messages are printed to stderr, e.g. when stdout receives the rendered image.
    Stderr,
    /// Messages are discarded.
    Silent,
}

/// Creates a logger for given target.
pub fn create_info_logger(target: LogTarget) -> InfoLogger {
    match target {
        LogTarget::Stdout => Arc::new(|msg: &str| println!("{msg}")),
        LogTarget::Stderr => Arc::new(|msg: &str| eprintln!("{msg}")),
        LogTarget::Silent => Arc::new(|_: &str| {}),
    }
}
