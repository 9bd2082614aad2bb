//! Payment request and response types.

use serde::{Deserialize, Serialize};

/// An incoming payment request. Transient, one per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Payment amount.
    pub amount: f64,
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Paying customer identifier.
    pub customer_id: String,
    /// Order being paid for; feeds the transaction id.
    pub order_id: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Outcome of a processed payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Synthetic transaction id, "txn_{order_id}_{unix_secs}".
    pub transaction_id: String,
    /// Always `success` once the operation starts.
    pub status: PaymentStatus,
    pub message: String,
    /// Wall-clock elapsed time for the operation in milliseconds.
    pub processing_time_ms: f64,
}

/// Payment outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
}
