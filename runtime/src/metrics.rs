//! Metrics for observability and monitoring.
//!
//! Metrics are recorded through the [`metrics`] facade. This crate installs no
//! recorder or exporter; hosts pick one (Prometheus, statsd, ...) and call
//! [`register_metrics`] once to attach descriptions.
//!
//! Recorded metrics:
//! - `store_dispatch_total` (labels: `store`, `action`)
//! - `store_dispatch_nested_total` (label: `store`)
//! - `store_reducer_duration_seconds` (label: `store`)
//! - `store_subscribers` (label: `store`)

use metrics::{describe_counter, describe_gauge, describe_histogram};
use std::time::Duration;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, gauge, histogram};

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        "store_dispatch_total",
        "Total number of actions applied by a store"
    );
    describe_counter!(
        "store_dispatch_nested_total",
        "Total number of actions dispatched from inside a subscriber and queued"
    );
    describe_histogram!(
        "store_reducer_duration_seconds",
        "Time taken by the reducer to produce the next state"
    );
    describe_gauge!(
        "store_subscribers",
        "Number of subscribers currently registered with a store"
    );
}

/// Store metrics recorder.
///
/// Holds the store name so every metric carries the same `store` label.
#[derive(Debug, Clone)]
pub struct StoreMetrics {
    store: String,
}

impl StoreMetrics {
    /// Create a recorder for the named store.
    #[must_use]
    pub fn new(store: impl Into<String>) -> Self {
        Self {
            store: store.into(),
        }
    }

    /// Record an applied action.
    pub fn record_dispatch(&self, action_type: &'static str, duration: Duration) {
        counter!("store_dispatch_total", "store" => self.store.clone(), "action" => action_type)
            .increment(1);
        histogram!("store_reducer_duration_seconds", "store" => self.store.clone())
            .record(duration.as_secs_f64());
    }

    /// Record an action queued by a dispatch from inside a subscriber.
    pub fn record_nested(&self) {
        counter!("store_dispatch_nested_total", "store" => self.store.clone()).increment(1);
    }

    /// Record the current number of subscribers.
    pub fn record_subscribers(&self, count: usize) {
        // Note: Precision loss acceptable for metrics (subscriber counts < 2^52)
        #[allow(clippy::cast_precision_loss)]
        gauge!("store_subscribers", "store" => self.store.clone()).set(count as f64);
    }
}
