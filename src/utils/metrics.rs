// src/utils/metrics.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

pub struct Metrics {
    start_time: Instant,
    requests_total: AtomicU64,
    requests_failed: AtomicU64,
    processing_time: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub requests_total: u64,
    pub requests_failed: u64,
    pub avg_processing_micros: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            requests_total: AtomicU64::new(0),
            requests_failed: AtomicU64::new(0),
            processing_time: AtomicU64::new(0),
        }
    }

    pub fn record_request(&self, duration: Duration, success: bool) {
        let micros = saturating_micros(duration);
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        let _ = self
            .processing_time
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |total| {
                Some(total.saturating_add(micros))
            });
        if !success {
            self.requests_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests_total = self.requests_total.load(Ordering::Relaxed);
        let processing_time = self.processing_time.load(Ordering::Relaxed);

        MetricsSnapshot {
            uptime_secs: self.start_time.elapsed().as_secs(),
            requests_total,
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            avg_processing_micros: processing_time.checked_div(requests_total).unwrap_or(0),
        }
    }
}

/// Whole microseconds, pinned at `u64::MAX` instead of wrapping.
pub fn saturating_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
