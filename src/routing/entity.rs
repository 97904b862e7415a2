//! Entity-identifier recognition.
//!
//! # Responsibilities
//! - Decide whether a path segment denotes an entity identifier
//! - Decode a matching segment into a type tag and an opaque id
//! - Guarantee lossless round-tripping back to the original segment
//!
//! # Design Decisions
//! - Hand-rolled character scan, no regex (O(n), no compile step)
//! - Split on the *first* underscore; the id may itself contain underscores
//! - Minimum id length is a tunable, not part of the grammar

use serde::Serialize;

/// Practical floor for the opaque id length. Shorter tails are treated as
/// incidental underscore usage, not identifiers.
pub const DEFAULT_MIN_ID_LEN: usize = 3;

/// A decoded entity identifier, e.g. `contact_abc` → type `contact`, id `abc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityId {
    /// Lowercase-initial alphanumeric type tag.
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Opaque platform-generated token. Never interpreted here.
    pub id: String,
}

impl EntityId {
    /// Reconstruct the original path segment.
    ///
    /// Invariant: `parse_entity_id(s, n).unwrap().to_segment() == s` for every
    /// matching segment `s`.
    pub fn to_segment(&self) -> String {
        format!("{}_{}", self.entity_type, self.id)
    }
}

/// Returns true if `segment` has the entity-identifier shape.
pub fn is_entity_id(segment: &str, min_id_len: usize) -> bool {
    parse_entity_id(segment, min_id_len).is_some()
}

/// Decode a path segment into an [`EntityId`], or `None` if the segment does
/// not have the `<type>_<id>` shape.
///
/// The type tag must start with a lowercase ASCII letter and contain only
/// ASCII alphanumerics. The id is everything after the first underscore; it
/// must be at least `min_id_len` characters of ASCII alphanumerics or
/// underscores.
pub fn parse_entity_id(segment: &str, min_id_len: usize) -> Option<EntityId> {
    let (type_part, id_part) = segment.split_once('_')?;

    let mut chars = type_part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    if id_part.len() < min_id_len {
        return None;
    }
    if !id_part
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    Some(EntityId {
        entity_type: type_part.to_string(),
        id: id_part.to_string(),
    })
}
