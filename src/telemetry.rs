//! Metrics tracking.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub started_at: DateTime<Utc>,
    pub upstream_requests: AtomicU64,
    pub upstream_errors: AtomicU64,
    pub transport_failures: AtomicU64,
    pub charts_served: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            upstream_requests: AtomicU64::new(0),
            upstream_errors: AtomicU64::new(0),
            transport_failures: AtomicU64::new(0),
            charts_served: AtomicU64::new(0),
        }
    }

    pub fn record_upstream_request(&self) {
        self.upstream_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_error(&self) {
        self.upstream_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_transport_failure(&self) {
        self.transport_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_chart_served(&self) {
        self.charts_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            started_at: self.started_at.to_rfc3339(),
            upstream_requests: self.upstream_requests.load(Ordering::Relaxed),
            upstream_errors: self.upstream_errors.load(Ordering::Relaxed),
            transport_failures: self.transport_failures.load(Ordering::Relaxed),
            charts_served: self.charts_served.load(Ordering::Relaxed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub started_at: String,
    pub upstream_requests: u64,
    pub upstream_errors: u64,
    pub transport_failures: u64,
    pub charts_served: u64,
}
