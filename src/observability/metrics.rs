//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lingolink_bootstrap_attempts_total` (counter): connection attempts
//!   by outcome (success/failure)
//! - `lingolink_database_up` (gauge): 1 = last readiness probe succeeded
//! - `lingolink_readiness_probes_total` (counter): probes by outcome
//!
//! # Design Decisions
//! - Prometheus exporter runs on its own listener, separate from the
//!   operational server
//! - Recording before the exporter is installed is a silent no-op, so the
//!   bootstrap loop can record attempts unconditionally

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record the outcome of one bootstrap connection attempt.
pub fn record_bootstrap_attempt(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("lingolink_bootstrap_attempts_total", "outcome" => outcome).increment(1);
}

/// Record the outcome of a readiness probe against the database.
pub fn record_readiness_probe(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("lingolink_readiness_probes_total", "outcome" => outcome).increment(1);
    metrics::gauge!("lingolink_database_up").set(if success { 1.0 } else { 0.0 });
}
