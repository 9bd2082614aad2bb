//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config
//! file and serialization back out through `GET /config`.

use serde::{Deserialize, Serialize};

/// Root configuration for the payment service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated database settings.
    pub database: DatabaseConfig,

    /// Service identity and simulated timeout budget.
    pub service: ServiceInfoConfig,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// HTTP timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Simulated database configuration.
///
/// `connection_pool_size` is the single knob the whole demo turns on:
/// small pools model contention and inflate request latency.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Simulated connection pool capacity.
    pub connection_pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_pool_size: 50,
        }
    }
}

/// Service identity section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServiceInfoConfig {
    /// Simulated database timeout in milliseconds. Carried in the snapshot
    /// and reported by `GET /config`; not wired to the HTTP timeout.
    pub timeout_ms: u64,

    /// Service version reported by `/health`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Default for ServiceInfoConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 100,
            version: None,
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8001".to_string(),
        }
    }
}

/// Timeout configuration for the HTTP layer.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    /// Must stay above the worst-case simulated latency (5s).
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.database.connection_pool_size, 50);
        assert_eq!(config.service.timeout_ms, 100);
        assert_eq!(config.service.version, None);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8001");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [database]
            connection_pool_size = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.database.connection_pool_size, 5);
        assert_eq!(config.service.timeout_ms, 100);
    }

    #[test]
    fn test_full_config_roundtrip() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [database]
            connection_pool_size = 2

            [service]
            timeout_ms = 250
            version = "1.2.3"

            [listener]
            bind_address = "127.0.0.1:9001"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.connection_pool_size, 2);
        assert_eq!(config.service.timeout_ms, 250);
        assert_eq!(config.service.version.as_deref(), Some("1.2.3"));

        let serialized = toml::to_string(&config).unwrap();
        let reparsed: ServiceConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed, config);
    }
}
