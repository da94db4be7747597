//! Request metrics.
//!
//! Without an installed recorder every call here is a no-op, so handlers
//! record unconditionally. [`install_prometheus`] wires up a scrape
//! endpoint when the operator asks for one.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use tracing::{debug, info};

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Unsupported method counter metric name.
pub const METRIC_UNSUPPORTED_METHOD: &str = "unsupported_method_total";
/// Dice rolled counter metric name.
pub const METRIC_DICE_ROLLED: &str = "dice_rolled_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of requests served");
    describe_counter!(
        METRIC_UNSUPPORTED_METHOD,
        "Requests rejected for using an unsupported method"
    );
    describe_counter!(METRIC_DICE_ROLLED, "Total number of dice rolled");

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn install_prometheus(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Increment the served requests counter.
pub fn inc_requests(route: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "route" => route).increment(1);
}

/// Increment the unsupported method counter.
pub fn inc_unsupported_method(route: &'static str) {
    counter!(METRIC_UNSUPPORTED_METHOD, "route" => route).increment(1);
}

/// Add to the dice rolled counter.
pub fn add_dice_rolled(count: u64) {
    counter!(METRIC_DICE_ROLLED).increment(count);
}

/// RAII guard for timing a request.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    route: &'static str,
}

impl LatencyTimer {
    /// Start timing a request on `route`.
    pub fn new(route: &'static str) -> Self {
        Self {
            start: Instant::now(),
            route,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => self.route).record(self.elapsed_ms());
    }
}
