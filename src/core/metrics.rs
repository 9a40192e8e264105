//! Sink metrics for observability
//!
//! Relaxed atomic counters for monitoring facade health: how many records
//! reached the stream, were filtered out, or failed to write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every handle of a sink
///
/// # Example
///
/// ```
/// use unilog::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
/// assert_eq!(metrics.written(), 0);
/// assert_eq!(metrics.write_failures(), 0);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Records written to the output stream
    written: AtomicU64,

    /// Records filtered out by the minimum severity
    suppressed: AtomicU64,

    /// Records lost to a failing output stream
    write_failures: AtomicU64,
}

impl SinkMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    pub(crate) fn record_written(&self) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}
