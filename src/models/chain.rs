use crate::config::ServiceConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChainPosition {
    Terminal,
    Intermediate,
}

/// # Chain Hop Response
///
/// Describes where this service sits in a simulated call chain. When
/// `next_service` is set the response only names the next hop; no request is
/// sent to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChainResult {
    pub message: String,
    pub service: String,
    pub instance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_service: Option<String>,
    pub chain_position: ChainPosition,
}

impl ChainResult {
    pub fn terminal(config: &ServiceConfig) -> Self {
        Self {
            message: "This is the end of the chain".to_string(),
            service: config.service_name.clone(),
            instance: config.instance_id.clone(),
            next_service: None,
            chain_position: ChainPosition::Terminal,
        }
    }

    pub fn intermediate(config: &ServiceConfig, next_service: &str) -> Self {
        Self {
            message: format!("Chain call from {}", config.service_name),
            service: config.service_name.clone(),
            instance: config.instance_id.clone(),
            next_service: Some(next_service.to_string()),
            chain_position: ChainPosition::Intermediate,
        }
    }
}
