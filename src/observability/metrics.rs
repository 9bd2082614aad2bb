//! Metrics collection and exposition.
//!
//! # Metrics
//! - `payment_requests_total` (counter): processed payments by pool tier
//! - `payment_processing_duration_seconds` (histogram): end-to-end latency
//! - `config_reloads_total` (counter): explicit and file-driven reloads

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::payments::latency::{HEALTHY_POOL_THRESHOLD, SEVERE_POOL_THRESHOLD};

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics exporter"),
    }
}

/// Record one processed payment and its duration.
pub fn record_payment(pool_size: u32, start_time: Instant) {
    let tier = if pool_size < SEVERE_POOL_THRESHOLD {
        "severe"
    } else if pool_size < HEALTHY_POOL_THRESHOLD {
        "moderate"
    } else {
        "healthy"
    };

    metrics::counter!("payment_requests_total", "pool_tier" => tier).increment(1);
    metrics::histogram!("payment_processing_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}

/// Record a configuration reload.
pub fn record_config_reload() {
    metrics::counter!("config_reloads_total").increment(1);
}
