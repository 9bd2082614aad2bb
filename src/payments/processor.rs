//! The payment operation.
//!
//! A single forward pass per request: read the config snapshot, simulate
//! connection acquisition (pool-size-driven delay), simulate processing
//! (fixed delay), and report the measured wall-clock time. The operation
//! cannot fail once started; malformed requests never reach it.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::config::ServiceConfig;
use crate::observability::tracing::TraceEmitter;
use crate::payments::latency;
use crate::payments::types::{PaymentRequest, PaymentResponse, PaymentStatus};

/// Fixed cost of the simulated payment processor, independent of pool size.
pub const PROCESSOR_DELAY: Duration = Duration::from_millis(10);

/// Process one payment, suspending for the simulated latencies.
///
/// Span tree recorded through `tracer`:
/// ```text
/// process_payment {payment.*, db.connection_pool_size, processing_time_ms}
/// ├── acquire_db_connection {latency_ms, warning?}
/// └── payment_processor
/// ```
/// Both suspensions are tokio timer waits; concurrent requests wait
/// independently.
pub async fn process_payment(
    request: PaymentRequest,
    config: Arc<ServiceConfig>,
    tracer: &dyn TraceEmitter,
) -> PaymentResponse {
    let begin = Instant::now();
    let pool_size = config.database.connection_pool_size;

    let mut root = tracer.start_span("process_payment");
    root.set_attribute("payment.amount", request.amount.into());
    root.set_attribute("payment.currency", request.currency.as_str().into());
    root.set_attribute("payment.customer_id", request.customer_id.as_str().into());
    root.set_attribute("payment.order_id", request.order_id.as_str().into());
    root.set_attribute("db.connection_pool_size", i64::from(pool_size).into());

    // Acquire a (simulated) database connection.
    {
        let mut db_span = root.child("acquire_db_connection");
        let latency_ms = latency::connection_latency_ms(pool_size);
        db_span.set_attribute("latency_ms", latency_ms.into());

        if pool_size < latency::SEVERE_POOL_THRESHOLD {
            db_span.set_attribute("warning", "connection_pool_exhausted".into());
            tracing::warn!(
                pool_size,
                latency_ms,
                order_id = %request.order_id,
                "Connection pool exhausted, request heavily delayed"
            );
        }

        tokio::time::sleep(Duration::from_secs_f64(latency_ms / 1000.0)).await;
    }

    // Run the (simulated) payment processor.
    {
        let _processor_span = root.child("payment_processor");
        tokio::time::sleep(PROCESSOR_DELAY).await;
    }

    let processing_time_ms = begin.elapsed().as_secs_f64() * 1000.0;
    root.set_attribute("processing_time_ms", processing_time_ms.into());

    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let transaction_id = format!("txn_{}_{}", request.order_id, unix_secs);

    tracing::debug!(
        transaction_id = %transaction_id,
        processing_time_ms,
        "Payment processed"
    );

    PaymentResponse {
        transaction_id,
        status: PaymentStatus::Success,
        message: "Payment processed successfully".to_string(),
        processing_time_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::tracing::{AttributeValue, TraceEmitter, TraceSpan};
    use std::sync::Mutex;

    /// Captures finished span names and attributes for assertions.
    #[derive(Default)]
    struct RecordingEmitter {
        spans: Arc<Mutex<Vec<(String, Vec<(String, AttributeValue)>)>>>,
    }

    struct RecordingSpan {
        name: String,
        attributes: Vec<(String, AttributeValue)>,
        sink: Arc<Mutex<Vec<(String, Vec<(String, AttributeValue)>)>>>,
    }

    impl TraceEmitter for RecordingEmitter {
        fn start_span(&self, name: &'static str) -> Box<dyn TraceSpan> {
            Box::new(RecordingSpan {
                name: name.to_string(),
                attributes: Vec::new(),
                sink: self.spans.clone(),
            })
        }
    }

    impl TraceSpan for RecordingSpan {
        fn set_attribute(&mut self, key: &'static str, value: AttributeValue) {
            self.attributes.push((key.to_string(), value));
        }

        fn child(&self, name: &'static str) -> Box<dyn TraceSpan> {
            Box::new(RecordingSpan {
                name: name.to_string(),
                attributes: Vec::new(),
                sink: self.sink.clone(),
            })
        }
    }

    impl Drop for RecordingSpan {
        fn drop(&mut self) {
            self.sink
                .lock()
                .unwrap()
                .push((self.name.clone(), std::mem::take(&mut self.attributes)));
        }
    }

    fn request() -> PaymentRequest {
        PaymentRequest {
            amount: 10.0,
            currency: "USD".to_string(),
            customer_id: "c1".to_string(),
            order_id: "o1".to_string(),
        }
    }

    fn config_with_pool(pool_size: u32) -> Arc<ServiceConfig> {
        let mut config = ServiceConfig::default();
        config.database.connection_pool_size = pool_size;
        Arc::new(config)
    }

    fn attr<'a>(
        attributes: &'a [(String, AttributeValue)],
        key: &str,
    ) -> Option<&'a AttributeValue> {
        attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[tokio::test]
    async fn test_healthy_pool_response() {
        let emitter = RecordingEmitter::default();
        let response = process_payment(request(), config_with_pool(50), &emitter).await;

        assert_eq!(response.status, PaymentStatus::Success);
        assert_eq!(response.message, "Payment processed successfully");
        assert!(response.transaction_id.starts_with("txn_o1_"));
        // Floor: healthy acquire latency (>= 10ms) plus the fixed 10ms.
        assert!(response.processing_time_ms >= 19.0);
    }

    #[tokio::test]
    async fn test_span_tree_and_timing() {
        let emitter = RecordingEmitter::default();
        let spans = emitter.spans.clone();
        let response = process_payment(request(), config_with_pool(50), &emitter).await;

        let spans = spans.lock().unwrap();
        let names: Vec<&str> = spans.iter().map(|(n, _)| n.as_str()).collect();
        // Children close before the root.
        assert_eq!(
            names,
            vec!["acquire_db_connection", "payment_processor", "process_payment"]
        );

        let (_, db_attrs) = &spans[0];
        let Some(AttributeValue::Float(latency_ms)) = attr(db_attrs, "latency_ms") else {
            panic!("latency_ms attribute missing");
        };
        assert!(*latency_ms >= 10.0 && *latency_ms < 50.0);
        assert!(attr(db_attrs, "warning").is_none());

        let (_, root_attrs) = &spans[2];
        assert_eq!(
            attr(root_attrs, "db.connection_pool_size"),
            Some(&AttributeValue::Int(50))
        );
        assert_eq!(
            attr(root_attrs, "payment.currency"),
            Some(&AttributeValue::String("USD".to_string()))
        );

        // Measured elapsed time covers both suspensions (small tolerance
        // for timer rounding).
        let Some(AttributeValue::Float(reported)) = attr(root_attrs, "processing_time_ms")
        else {
            panic!("processing_time_ms attribute missing");
        };
        assert!(*reported >= latency_ms + 10.0 - 1.0);
        assert_eq!(*reported, response.processing_time_ms);
    }

    #[tokio::test]
    async fn test_exhausted_pool_sets_warning_and_floor() {
        let emitter = RecordingEmitter::default();
        let spans = emitter.spans.clone();
        let response = process_payment(request(), config_with_pool(2), &emitter).await;

        assert!(response.processing_time_ms >= 2010.0);

        let spans = spans.lock().unwrap();
        let (name, db_attrs) = &spans[0];
        assert_eq!(name, "acquire_db_connection");
        assert_eq!(
            attr(db_attrs, "warning"),
            Some(&AttributeValue::String("connection_pool_exhausted".to_string()))
        );
    }
}
