//! Demo Payment Service Library

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod payments;

/// Service name reported by `/health` and attached to exported trace data.
pub const SERVICE_NAME: &str = "payment-service";

pub use config::store::ConfigStore;
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
