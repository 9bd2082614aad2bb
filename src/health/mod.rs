//! Health reporting.
//!
//! Health is a pure projection of the current configuration snapshot: the
//! service is "degraded" whenever the simulated pool is below the healthy
//! threshold, with a warning string surfaced alongside. There is nothing
//! to probe; the config is the only input.

use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::payments::latency::HEALTHY_POOL_THRESHOLD;
use crate::SERVICE_NAME;

/// Version reported when the config file does not set one.
const FALLBACK_VERSION: &str = "1.0.0";

/// Overall service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub config: PoolSummary,
}

/// The config excerpt surfaced in health responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSummary {
    pub connection_pool_size: u32,
    pub warning: Option<String>,
}

impl HealthReport {
    /// Derive the report from a configuration snapshot.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let pool_size = config.database.connection_pool_size;
        let degraded = pool_size < HEALTHY_POOL_THRESHOLD;

        Self {
            status: if degraded {
                HealthStatus::Degraded
            } else {
                HealthStatus::Healthy
            },
            service: SERVICE_NAME.to_string(),
            version: config
                .service
                .version
                .clone()
                .unwrap_or_else(|| FALLBACK_VERSION.to_string()),
            config: PoolSummary {
                connection_pool_size: pool_size,
                warning: degraded.then(|| "Pool size too low!".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_pool(pool_size: u32) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        config.database.connection_pool_size = pool_size;
        config
    }

    #[test]
    fn test_degraded_below_threshold() {
        let report = HealthReport::from_config(&config_with_pool(24));
        assert_eq!(report.status, HealthStatus::Degraded);
        assert!(report.config.warning.is_some());
    }

    #[test]
    fn test_healthy_at_threshold() {
        let report = HealthReport::from_config(&config_with_pool(25));
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.config.warning, None);
    }

    #[test]
    fn test_healthy_defaults() {
        let report = HealthReport::from_config(&ServiceConfig::default());
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.service, "payment-service");
        assert_eq!(report.version, "1.0.0");
        assert_eq!(report.config.connection_pool_size, 50);
    }

    #[test]
    fn test_version_from_config() {
        let mut config = config_with_pool(2);
        config.service.version = Some("2.3.4".to_string());
        let report = HealthReport::from_config(&config);
        assert_eq!(report.version, "2.3.4");
        assert_eq!(report.status, HealthStatus::Degraded);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let report = HealthReport::from_config(&config_with_pool(2));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""status":"degraded""#));
        assert!(json.contains(r#""warning":"Pool size too low!""#));
    }
}
