//! Distributed tracing support.
//!
//! # Responsibilities
//! - Define the span-recording capability the payment operation depends on
//! - Export spans over OTLP/gRPC when an exporter can be constructed
//! - Degrade to a no-op emitter when it cannot (tracing is best-effort)
//!
//! # Design Decisions
//! - Handlers hold a `dyn TraceEmitter`, so "tracing disabled" is just a
//!   different implementation, not a special case at every call site
//! - Spans end on drop, tying span lifetime to the operation's scope

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry::trace::{TraceContextExt, TraceError, Tracer, TracerProvider};
use opentelemetry::{Context, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace, Resource};

use crate::SERVICE_NAME;

/// Default OTLP collector endpoint, matching the usual collector setup.
pub const DEFAULT_OTLP_ENDPOINT: &str = "localhost:4317";

/// Environment variable selecting the OTLP endpoint.
pub const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// An attribute value attached to a span.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<AttributeValue> for opentelemetry::Value {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Bool(b) => b.into(),
            AttributeValue::Int(i) => i.into(),
            AttributeValue::Float(f) => f.into(),
            AttributeValue::String(s) => s.into(),
        }
    }
}

/// A live span. Attributes may be attached while it is open; the span is
/// closed when the handle is dropped, whatever the outcome of the
/// surrounding operation.
pub trait TraceSpan: Send {
    fn set_attribute(&mut self, key: &'static str, value: AttributeValue);

    /// Open a child span nested under this one.
    fn child(&self, name: &'static str) -> Box<dyn TraceSpan>;
}

/// Capability for recording trace spans.
pub trait TraceEmitter: Send + Sync {
    /// Open a root span for one operation.
    fn start_span(&self, name: &'static str) -> Box<dyn TraceSpan>;
}

/// Emitter that records nothing. Used when no exporter is available.
pub struct NoopTraceEmitter;

struct NoopSpan;

impl TraceEmitter for NoopTraceEmitter {
    fn start_span(&self, _name: &'static str) -> Box<dyn TraceSpan> {
        Box::new(NoopSpan)
    }
}

impl TraceSpan for NoopSpan {
    fn set_attribute(&mut self, _key: &'static str, _value: AttributeValue) {}

    fn child(&self, _name: &'static str) -> Box<dyn TraceSpan> {
        Box::new(NoopSpan)
    }
}

/// Emitter backed by the OpenTelemetry SDK.
pub struct OtelTraceEmitter {
    tracer: Arc<trace::Tracer>,
}

struct OtelSpan {
    cx: Context,
    tracer: Arc<trace::Tracer>,
}

impl TraceEmitter for OtelTraceEmitter {
    fn start_span(&self, name: &'static str) -> Box<dyn TraceSpan> {
        let span = self.tracer.start(name);
        Box::new(OtelSpan {
            cx: Context::new().with_span(span),
            tracer: self.tracer.clone(),
        })
    }
}

impl TraceSpan for OtelSpan {
    fn set_attribute(&mut self, key: &'static str, value: AttributeValue) {
        self.cx.span().set_attribute(KeyValue::new(key, value));
    }

    fn child(&self, name: &'static str) -> Box<dyn TraceSpan> {
        let span = self.tracer.start_with_context(name, &self.cx);
        Box::new(OtelSpan {
            cx: self.cx.with_span(span),
            tracer: self.tracer.clone(),
        })
    }
}

impl Drop for OtelSpan {
    fn drop(&mut self) {
        self.cx.span().end();
    }
}

/// Install the OTLP trace exporter and return an emitter for it.
///
/// The endpoint comes from `OTEL_EXPORTER_OTLP_ENDPOINT` (default
/// "localhost:4317"). Construction failure is swallowed: the service gets
/// a no-op emitter and keeps running, per the best-effort tracing model.
pub fn init_tracer() -> Arc<dyn TraceEmitter> {
    let endpoint = std::env::var(OTLP_ENDPOINT_ENV)
        .unwrap_or_else(|_| DEFAULT_OTLP_ENDPOINT.to_string());

    match install_otlp(&endpoint) {
        Ok(emitter) => {
            tracing::info!(endpoint = %endpoint, "OTLP trace exporter installed");
            Arc::new(emitter)
        }
        Err(e) => {
            tracing::warn!(
                endpoint = %endpoint,
                error = %e,
                "Trace exporter unavailable, tracing disabled"
            );
            Arc::new(NoopTraceEmitter)
        }
    }
}

fn install_otlp(endpoint: &str) -> Result<OtelTraceEmitter, TraceError> {
    // Tonic wants a full URI; the conventional host:port form gets http.
    let endpoint = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    };

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    let trace_config = trace::Config::default().with_resource(Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
    ]));

    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(trace_config)
        .install_batch(runtime::Tokio)?;

    global::set_tracer_provider(provider.clone());

    Ok(OtelTraceEmitter {
        tracer: Arc::new(provider.tracer(SERVICE_NAME)),
    })
}

/// Flush and shut down the global tracer provider.
pub fn shutdown_tracer() {
    global::shutdown_tracer_provider();
}
