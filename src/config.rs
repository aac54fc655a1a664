use std::fs;

use thiserror::Error;

/// Version advertised by every response body.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logical service name reported to mesh dashboards.
pub const SERVICE_NAME: &str = "backend-service";

pub const DEFAULT_PORT: u16 = 4000;

const HOSTNAME_FILES: [&str; 2] = ["/proc/sys/kernel/hostname", "/etc/hostname"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// # Service Identity and Listener Settings
///
/// Built once at startup and shared read-only with every handler through
/// `web::Data`. Nothing in here changes after the server starts.
///
/// ## Environment
/// - `HOSTNAME`: instance id, falls back to the machine hostname
/// - `PORT`: listen port, defaults to `4000`
/// - `DEBUG`: `true` (case-insensitive) turns on debug logging. `FLASK_DEBUG`
///   is read when `DEBUG` is unset, so existing manifests keep working.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub service_name: String,
    pub version: String,
    pub instance_id: String,
    pub port: u16,
    pub debug: bool,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let instance_id = lookup("HOSTNAME")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(machine_hostname);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let debug = lookup("DEBUG")
            .or_else(|| lookup("FLASK_DEBUG"))
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            service_name: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            instance_id,
            port,
            debug,
        })
    }

    /// Fixed identity for tests and local tooling.
    pub fn with_instance(instance_id: &str) -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            instance_id: instance_id.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn machine_hostname() -> String {
    HOSTNAME_FILES
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .map(|contents| contents.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
