//! Constant term reconstruction configuration.
use std::thread;

/// Global configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of worker threads used when evaluating multiple root
    /// documents at once. A zero value is treated as one.
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { workers }
    }
}

impl Config {
    /// Returns a configuration using the given number of workers.
    pub fn with_workers(workers: usize) -> Self {
        Self { workers }
    }
}
