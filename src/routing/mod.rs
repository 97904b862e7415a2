//! Route classification subsystem.
//!
//! # Data Flow
//! ```text
//! Tenant-stripped path
//!     → call.rs (whole-path function-call detection, highest precedence)
//!     → entity.rs (entity-identifier recognition per segment)
//!     → classifier.rs (precedence-ordered rules over the compiled table)
//!     → Return: exactly one Route variant
//!
//! Table Compilation (at startup and on reload):
//!     RoutingConfig
//!     → Compile membership sets (collections, entity types)
//!     → Freeze as immutable RoutingTable, swap atomically
//! ```
//!
//! # Design Decisions
//! - Classification is pure and total: no I/O, no errors, Unknown as fallback
//! - Call detection precedes segment splitting (arguments may contain `/`)
//! - Deterministic: same path and table always yield the same route

pub mod call;
pub mod classifier;
pub mod entity;

use serde::Serialize;

pub use call::{ArgKind, ArgValue, FunctionCall};
pub use classifier::{Route, RoutingTable};
pub use entity::EntityId;

use crate::tenant::TenantResolution;

/// The per-request classification result published to downstream handlers.
///
/// Built once by the routing middleware, read-only afterwards, and discarded
/// with the request. Handlers read this instead of re-parsing the raw path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// Who the request belongs to and how that was determined.
    pub tenant: TenantResolution,

    /// The classified route.
    pub route: Route,

    /// The tenant-stripped path the classifier saw.
    pub path: String,
}
