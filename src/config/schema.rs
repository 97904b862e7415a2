//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::entity::DEFAULT_MIN_ID_LEN;

/// Root configuration for the intent router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address, timeouts, body limit).
    pub listener: ListenerConfig,

    /// Tenant resolution settings.
    pub tenancy: TenancyConfig,

    /// Route classification settings.
    pub routing: RoutingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Tenant resolution configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TenancyConfig {
    /// Base domain for subdomain resolution. `acme.<base_domain>` resolves
    /// tenant `acme`. Absent disables the subdomain strategy regardless of
    /// `resolve_subdomain`.
    pub base_domain: Option<String>,

    /// Header carrying the tenant slug.
    pub header: String,

    /// Path marker segment: `/{marker}/{tenant}/...` carries the tenant in
    /// the path and is stripped before classification.
    pub path_marker: String,

    /// Strategy toggles, tried in this order.
    pub resolve_subdomain: bool,
    pub resolve_path: bool,
    pub resolve_header: bool,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            base_domain: None,
            header: "x-tenant-id".to_string(),
            path_marker: "t".to_string(),
            resolve_subdomain: true,
            resolve_path: true,
            resolve_header: true,
        }
    }
}

/// Route classification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Known collection names. Unlisted letter-led alphanumeric segments
    /// still classify as collections (permissive fallback).
    pub collections: Vec<String>,

    /// Optional allow-list of entity type prefixes. Absent accepts any
    /// shape-matching segment.
    pub entity_types: Option<Vec<String>>,

    /// Minimum length of the opaque id part of an entity identifier.
    #[serde(default = "default_min_entity_id_len")]
    pub min_entity_id_len: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            entity_types: None,
            min_entity_id_len: DEFAULT_MIN_ID_LEN,
        }
    }
}

fn default_min_entity_id_len() -> usize {
    DEFAULT_MIN_ID_LEN
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// JSON lines for production log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Metrics exporter listen address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "intent_router=info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.routing.min_entity_id_len, 3);
        assert_eq!(config.tenancy.path_marker, "t");
        assert!(config.routing.entity_types.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let config: RouterConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [tenancy]
            base_domain = "api.example.com"
            resolve_header = false

            [routing]
            collections = ["contacts", "deals"]
            entity_types = ["contact", "deal"]
            min_entity_id_len = 4

            [observability]
            log_format = "json"
            metrics_enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.routing.collections.len(), 2);
        assert_eq!(config.routing.min_entity_id_len, 4);
        assert!(!config.tenancy.resolve_header);
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }
}
