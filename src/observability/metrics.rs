//! Metrics collection and exposition.
//!
//! # Metrics
//! - `backend_requests_total` (counter): requests by route binding, status
//! - `backend_request_duration_seconds` (histogram): latency by route binding
//!
//! # Design Decisions
//! - Labels use the route table's binding names, so the three top-level
//!   bindings show up as `admin`, `api_index` and `api_v1`
//! - Exposition on a separate scrape address, gated by config

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    if let Err(e) = builder.install() {
        tracing::error!(error = %e, "Failed to install metrics exporter");
    } else {
        tracing::info!(address = %addr, "Metrics exporter listening");
    }
}

/// Record one completed request against its route binding.
pub fn record_request(route: &str, status: u16, start: Instant) {
    counter!(
        "backend_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "backend_request_duration_seconds",
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
