//! Route classification.
//!
//! # Responsibilities
//! - Turn a tenant-stripped path into exactly one [`Route`] variant
//! - Apply the precedence order: whole-path call, search, entity, collection,
//!   meta marker, unknown
//! - Stay total: every input resolves to a route, never an error
//!
//! # Design Decisions
//! - Known collections and type prefixes compiled at startup, immutable at
//!   runtime; hot reload swaps the whole table atomically
//! - Whole-path call detection runs before segment splitting so that call
//!   arguments containing slashes are never fragmented
//! - First matching rule wins; deterministic for a given table
//! - The collection fallback is intentionally permissive: any letter-led
//!   alphanumeric segment classifies as a collection and non-existence is
//!   downstream's 404, not a parsing failure
//! - Non-call paths with three or more segments are out of grammar and
//!   classify as `Unknown` with all segments preserved for diagnostics

use std::collections::HashSet;

use serde::Serialize;

use crate::config::schema::RoutingConfig;
use crate::routing::call::{parse_function_call, FunctionCall};
use crate::routing::entity::{parse_entity_id, EntityId};

/// The classification outcome. Exactly one variant per request; consumers
/// match exhaustively, so adding a variant is a compile-time exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Collection {
        collection: String,
    },
    Entity {
        entity: EntityId,
    },
    EntityAction {
        entity: EntityId,
        action: String,
    },
    CollectionAction {
        collection: String,
        action: String,
    },
    /// Introspection request (`$`-prefixed segment). Entity and collection
    /// scope are mutually exclusive; both absent means root-level.
    Meta {
        resource: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        entity: Option<EntityId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        collection: Option<String>,
    },
    FunctionCall {
        call: FunctionCall,
    },
    Search {},
    /// Universal fallback. A value, not an error; carries the raw segments
    /// forward for diagnostics.
    Unknown {
        segments: Vec<String>,
    },
}

impl Route {
    /// Stable label for logs and metrics.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Route::Collection { .. } => "collection",
            Route::Entity { .. } => "entity",
            Route::EntityAction { .. } => "entity_action",
            Route::CollectionAction { .. } => "collection_action",
            Route::Meta { .. } => "meta",
            Route::FunctionCall { .. } => "function_call",
            Route::Search {} => "search",
            Route::Unknown { .. } => "unknown",
        }
    }
}

/// Compiled classification table: set-membership form of the routing config.
///
/// Immutable after construction; share via `Arc` and swap wholesale on
/// config reload.
#[derive(Debug)]
pub struct RoutingTable {
    collections: HashSet<String>,
    entity_types: Option<HashSet<String>>,
    min_entity_id_len: usize,
}

impl RoutingTable {
    /// Compile the routing section of the configuration.
    pub fn compile(config: &RoutingConfig) -> Self {
        Self {
            collections: config.collections.iter().cloned().collect(),
            entity_types: config
                .entity_types
                .as_ref()
                .map(|types| types.iter().cloned().collect()),
            min_entity_id_len: config.min_entity_id_len,
        }
    }

    /// Classify a tenant-stripped path. Total: every string input, however
    /// malformed, resolves to a [`Route`].
    pub fn classify(&self, path: &str) -> Route {
        let path = path.trim_matches('/');

        if path.is_empty() {
            return Route::Unknown {
                segments: Vec::new(),
            };
        }

        // Whole-path call detection first: an argument may contain slashes.
        if let Some(call) = parse_function_call(path, self.min_entity_id_len) {
            return Route::FunctionCall { call };
        }

        let segments: Vec<&str> = path.split('/').collect();
        let first = segments[0];

        if first == "search" {
            return Route::Search {};
        }

        if let Some(entity) = self.recognize_entity(first) {
            match segments.as_slice() {
                [_] => return Route::Entity { entity },
                [_, second] => {
                    if let Some(resource) = second.strip_prefix('$') {
                        return Route::Meta {
                            resource: resource.to_string(),
                            entity: Some(entity),
                            collection: None,
                        };
                    }
                    return Route::EntityAction {
                        entity,
                        action: second.to_string(),
                    };
                }
                _ => {} // out of grammar, falls through to Unknown
            }
        }

        if self.collections.contains(first) || looks_like_collection(first) {
            match segments.as_slice() {
                [_] => {
                    return Route::Collection {
                        collection: first.to_string(),
                    }
                }
                [_, second] => {
                    if let Some(resource) = second.strip_prefix('$') {
                        return Route::Meta {
                            resource: resource.to_string(),
                            entity: None,
                            collection: Some(first.to_string()),
                        };
                    }
                    return Route::CollectionAction {
                        collection: first.to_string(),
                        action: second.to_string(),
                    };
                }
                _ => {}
            }
        }

        if segments.len() == 1 {
            if let Some(resource) = first.strip_prefix('$') {
                return Route::Meta {
                    resource: resource.to_string(),
                    entity: None,
                    collection: None,
                };
            }
        }

        Route::Unknown {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Entity recognition with the optional type allow-list applied.
    fn recognize_entity(&self, segment: &str) -> Option<EntityId> {
        let entity = parse_entity_id(segment, self.min_entity_id_len)?;
        if let Some(allowed) = &self.entity_types {
            if !allowed.contains(&entity.entity_type) {
                return None;
            }
        }
        Some(entity)
    }
}

/// Permissive collection heuristic: letter-led, letters and digits only.
/// Keeps classification total; unknown names resolve downstream to a 404.
fn looks_like_collection(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
