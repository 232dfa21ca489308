//! Diagnostic output for the harness.
//!
//! Verbose response bodies and teardown failures are written here rather than
//! returned, since neither is allowed to influence a scenario's outcome.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

/// Destination for diagnostic lines.
pub trait Sink: std::fmt::Debug + Send + Sync {
    /// Record a single diagnostic line.
    fn write(&self, line: &str);
}

/// Writes diagnostic lines as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, line: &str) {
        info!(target: "contract::diagnostics", "{line}");
    }
}

/// Collects diagnostic lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the harness
/// and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// All lines written so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
