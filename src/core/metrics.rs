//! Logger metrics for observability
//!
//! Counters for lines built, per-output deliveries, threshold skips and
//! failed writes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_structured_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_line();
/// metrics.record_delivered();
/// metrics.record_failed();
///
/// assert_eq!(metrics.lines_logged(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines built by successful `log` calls
    lines_logged: AtomicU64,

    /// Lines handed to an output successfully
    delivered: AtomicU64,

    /// Outputs skipped because of their threshold
    skipped: AtomicU64,

    /// Output writes that returned an error
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_logged: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a built line; returns the previous count
    #[inline]
    pub fn record_line(&self) -> u64 {
        self.lines_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_skipped(&self) -> u64 {
        self.skipped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage of attempted writes (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing was written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_writes() as f64;
        let total = self.delivered() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_logged.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.skipped.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_logged: AtomicU64::new(self.lines_logged()),
            delivered: AtomicU64::new(self.delivered()),
            skipped: AtomicU64::new(self.skipped()),
            failed_writes: AtomicU64::new(self.failed_writes()),
        }
    }
}
