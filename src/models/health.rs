use crate::config::ServiceConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Reported by the liveness probe. The status is always `"healthy"`; the
/// identity fields let a caller see which replica answered.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "backend-service",
///   "version": "1.0.0",
///   "instance": "backend-v1-5d8f7c9b4-x2x7q",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub instance: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy(config: &ServiceConfig) -> Self {
        Self {
            status: "healthy".to_string(),
            service: config.service_name.clone(),
            version: config.version.clone(),
            instance: config.instance_id.clone(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_status_healthy() {
        let config = ServiceConfig::with_instance("pod-1");
        let response = HealthStatus::healthy(&config);

        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "backend-service");
        assert_eq!(response.version, "1.0.0");
        assert_eq!(response.instance, "pod-1");

        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }
}
