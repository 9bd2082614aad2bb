//! Payment processing module.
//!
//! # Data Flow
//! ```text
//! POST /api/v1/payments
//!     → types.rs (deserialize PaymentRequest)
//!     → processor.rs (single-pass operation)
//!         reads config snapshot
//!         → latency.rs (pool size → simulated delay)
//!         → suspends, records spans via observability::tracing
//!     → types.rs (PaymentResponse)
//! ```
//!
//! # Design Decisions
//! - The operation has no error path of its own; bad request bodies are
//!   rejected by the HTTP layer before it starts
//! - Each request suspends on its own tokio timer, so thousands of
//!   contended requests wait concurrently without blocking each other

pub mod latency;
pub mod processor;
pub mod types;

pub use types::{PaymentRequest, PaymentResponse};
