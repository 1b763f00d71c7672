//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the forwarding gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Downstream fraud-detection service address.
    pub service: ServiceConfig,

    /// Listener configuration (bind address).
    #[serde(default)]
    pub listener: ListenerConfig,

    /// Timeout configuration.
    #[serde(default)]
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Address of the downstream service every route forwards to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Downstream hostname or IP (e.g., "frx.internal").
    pub host: String,

    /// Downstream port. Kept as a string to mirror the config contract;
    /// validation checks it fits a port number.
    pub port: String,
}

impl ServiceConfig {
    /// The `host:port` authority requests are re-targeted to.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9100").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9100".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    /// Bounds how long an unresponsive downstream can pin a request.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [service]
            host = "127.0.0.1"
            port = "8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.host, "127.0.0.1");
        assert_eq!(config.service.port, "8080");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9100");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_authority() {
        let service = ServiceConfig {
            host: "frx.internal".to_string(),
            port: "9000".to_string(),
        };
        assert_eq!(service.authority(), "frx.internal:9000");
    }

    #[test]
    fn test_sections_override_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [service]
            host = "10.0.0.5"
            port = "9000"

            [listener]
            bind_address = "127.0.0.1:9200"

            [timeouts]
            request_secs = 5

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9200");
        assert_eq!(config.timeouts.request_secs, 5);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_service_section_is_required() {
        let result = toml::from_str::<GatewayConfig>("[listener]\nbind_address = \"0.0.0.0:9100\"\n");
        assert!(result.is_err());
    }
}
