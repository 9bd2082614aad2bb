//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! payments/processor produces:
//!     → tracing.rs (spans with payment attributes → OTLP exporter)
//!     → metrics.rs (request counters, duration histogram)
//! all subsystems produce:
//!     → logging.rs (structured log events via tracing-subscriber)
//! ```
//!
//! # Design Decisions
//! - The trace exporter is best-effort: if it cannot be constructed the
//!   service runs with a no-op emitter and no user-visible effect
//! - Handlers depend on the `TraceEmitter` trait, never on the exporter
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
pub mod tracing;
