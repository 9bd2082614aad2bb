//! Lifecycle management subsystem.
//!
//! Startup ordering lives in `main.rs` (config first, then observability,
//! then the listener); this module provides the shutdown coordinator that
//! ties Ctrl+C to the HTTP server's graceful drain.

pub mod shutdown;

pub use shutdown::Shutdown;
