//! Endpoint handlers.

use std::time::Instant;

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::health::HealthReport;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::payments::processor;
use crate::payments::types::{PaymentRequest, PaymentResponse};

/// Health check endpoint, derived from the current config snapshot.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_config(&state.store.current()))
}

/// Return the current configuration (for debugging).
pub async fn get_config(State(state): State<AppState>) -> Json<ServiceConfig> {
    Json(state.store.current().as_ref().clone())
}

/// Body of `POST /reload`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub status: String,
    pub config: ServiceConfig,
}

/// Reload configuration from the backing file.
pub async fn reload(State(state): State<AppState>) -> Json<ReloadResponse> {
    let config = state.store.reload();
    metrics::record_config_reload();
    tracing::info!(
        pool_size = config.database.connection_pool_size,
        "Configuration reloaded"
    );
    Json(ReloadResponse {
        status: "reloaded".to_string(),
        config: config.as_ref().clone(),
    })
}

/// Process a payment.
///
/// Latency follows database.connection_pool_size: a starved pool means
/// multi-second simulated contention. A body that fails schema checks is
/// rejected by the extractor before this handler runs.
pub async fn submit_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Json<PaymentResponse> {
    let start_time = Instant::now();
    let config = state.store.current();
    let pool_size = config.database.connection_pool_size;

    let response = processor::process_payment(request, config, state.tracer.as_ref()).await;

    metrics::record_payment(pool_size, start_time);
    Json(response)
}
