//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check name shapes the classifier relies on (collections, type prefixes)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("collection name '{0}' must be letter-led alphanumeric")]
    InvalidCollectionName(String),

    #[error("duplicate collection name '{0}'")]
    DuplicateCollection(String),

    #[error("entity type prefix '{0}' must start lowercase and be alphanumeric")]
    InvalidEntityTypePrefix(String),

    #[error("duplicate entity type prefix '{0}'")]
    DuplicateEntityTypePrefix(String),

    #[error("tenant header name must be a non-empty token")]
    InvalidTenantHeader,

    #[error("tenant path marker must be a non-empty letter-led segment")]
    InvalidPathMarker,

    #[error("minimum entity id length must be at least 1")]
    ZeroMinEntityIdLen,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for name in &config.routing.collections {
        if !is_collection_name(name) {
            errors.push(ValidationError::InvalidCollectionName(name.clone()));
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateCollection(name.clone()));
        }
    }

    if let Some(types) = &config.routing.entity_types {
        let mut seen = HashSet::new();
        for prefix in types {
            if !is_type_prefix(prefix) {
                errors.push(ValidationError::InvalidEntityTypePrefix(prefix.clone()));
            }
            if !seen.insert(prefix) {
                errors.push(ValidationError::DuplicateEntityTypePrefix(prefix.clone()));
            }
        }
    }

    if config.routing.min_entity_id_len == 0 {
        errors.push(ValidationError::ZeroMinEntityIdLen);
    }

    let header = &config.tenancy.header;
    if header.is_empty() || !header.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        errors.push(ValidationError::InvalidTenantHeader);
    }

    let marker = &config.tenancy.path_marker;
    if marker.is_empty()
        || !marker.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        || !marker.chars().all(|c| c.is_ascii_alphanumeric())
    {
        errors.push(ValidationError::InvalidPathMarker);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_collection_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_type_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
