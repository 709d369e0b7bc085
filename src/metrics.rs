//! Prometheus metrics for request counts and query latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Database query latency metric name.
pub const METRIC_DB_QUERY_LATENCY: &str = "db_query_latency_ms";
/// IPS computation latency metric name.
pub const METRIC_IPS_COMPUTE_LATENCY: &str = "ips_compute_latency_ms";
/// Mahasiswa listings served counter metric name.
pub const METRIC_MAHASISWA_LISTED: &str = "mahasiswa_listed_total";
/// IPS reports computed counter metric name.
pub const METRIC_IPS_COMPUTED: &str = "ips_computed_total";
/// Rejected grade tokens counter metric name.
pub const METRIC_INVALID_GRADES: &str = "invalid_grades_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_DB_QUERY_LATENCY,
        "Database query latency in milliseconds"
    );
    describe_histogram!(
        METRIC_IPS_COMPUTE_LATENCY,
        "IPS request handling latency in milliseconds"
    );

    describe_counter!(
        METRIC_MAHASISWA_LISTED,
        "Total number of mahasiswa list requests served"
    );
    describe_counter!(METRIC_IPS_COMPUTED, "Total number of IPS reports computed");
    describe_counter!(
        METRIC_INVALID_GRADES,
        "Total number of grade tokens rejected as invalid"
    );

    debug!("Metrics initialized");
}

/// Increment the mahasiswa listings counter.
pub fn inc_mahasiswa_listed() {
    counter!(METRIC_MAHASISWA_LISTED).increment(1);
}

/// Increment the IPS reports counter.
pub fn inc_ips_computed() {
    counter!(METRIC_IPS_COMPUTED).increment(1);
}

/// Increment the rejected-grade counter.
pub fn inc_invalid_grades() {
    counter!(METRIC_INVALID_GRADES).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        histogram!(self.metric_name).record(latency_ms);
    }
}

/// Create a latency timer for a database query.
pub fn timer_db_query() -> LatencyTimer {
    LatencyTimer::new(METRIC_DB_QUERY_LATENCY)
}

/// Create a latency timer for IPS request handling.
pub fn timer_ips_compute() -> LatencyTimer {
    LatencyTimer::new(METRIC_IPS_COMPUTE_LATENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("test_metric");
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0); // Allow some tolerance
        // Timer will record on drop
    }
}
