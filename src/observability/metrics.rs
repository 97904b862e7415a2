//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): classified requests by route kind
//!   and tenant source
//!
//! # Design Decisions
//! - Exporter runs on its own listener, outside the classified URL space
//! - Labels are static strings; no per-path cardinality

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own port.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            metrics::describe_counter!(
                "router_requests_total",
                "Requests classified, by route kind and tenant source"
            );
            tracing::info!(address = %addr, "Metrics exporter started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Count one classified request.
pub fn record_classification(kind: &'static str, tenant_source: &'static str) {
    counter!(
        "router_requests_total",
        "kind" => kind,
        "tenant_source" => tenant_source
    )
    .increment(1);
}
