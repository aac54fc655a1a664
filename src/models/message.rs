use crate::config::ServiceConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FAILURE_MESSAGE: &str = "Random service failure for demo purposes";

/// Static description of the runtime serving the request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Metadata {
    pub hostname: String,
    pub rust_version: String,
    pub framework: String,
}

impl Metadata {
    pub fn for_instance(instance_id: &str) -> Self {
        Self {
            hostname: instance_id.to_string(),
            rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
            framework: "actix-web".to_string(),
        }
    }
}

/// # Message Response
///
/// Successful answer of `GET /api/message`. `request_id` and `source` echo
/// the `X-Request-ID` and `X-Source` headers so traces can be correlated
/// across hops.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub version: String,
    pub instance: String,
    pub processing_time_ms: f64,
    pub request_id: String,
    pub source: String,
    pub timestamp: String,
    pub metadata: Metadata,
}

impl MessageResponse {
    pub fn new(
        config: &ServiceConfig,
        processing_time_ms: f64,
        request_id: String,
        source: String,
    ) -> Self {
        Self {
            message: format!("Hello from {}!", config.service_name),
            version: config.version.clone(),
            instance: config.instance_id.clone(),
            processing_time_ms,
            request_id,
            source,
            timestamp: Utc::now().to_rfc3339(),
            metadata: Metadata::for_instance(&config.instance_id),
        }
    }
}

/// Body of the injected HTTP 500.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub service: String,
    pub instance: String,
    pub request_id: String,
}

impl ErrorResponse {
    pub fn simulated_failure(service: &str, instance: &str, request_id: &str) -> Self {
        Self {
            error: FAILURE_MESSAGE.to_string(),
            service: service.to_string(),
            instance: instance.to_string(),
            request_id: request_id.to_string(),
        }
    }
}
