//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout)
//!     → handlers.rs (health / config / reload / payments)
//!     → payments::processor (for POST /api/v1/payments)
//!     → JSON response
//! ```
//!
//! Body schema validation happens at the `Json` extractor: a malformed
//! payment body is rejected with a 4xx before the operation starts.

pub mod handlers;
pub mod request;
pub mod server;

pub use request::MakeRequestUuid;
pub use server::{AppState, HttpServer};
