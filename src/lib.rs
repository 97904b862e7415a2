//! Route classification front for a multi-tenant structured API.
//!
//! Every inbound path is resolved to exactly one typed [`routing::Route`]
//! before any handler runs: collection queries, entity lookups and actions,
//! introspection markers, path-embedded function calls, and search all share
//! one URL space and are disambiguated here.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod tenant;

pub use config::RouterConfig;
pub use http::{ActiveState, HttpServer};
pub use lifecycle::Shutdown;
pub use routing::{Route, RouteInfo, RoutingTable};
pub use tenant::{TenantResolution, TenantResolver, TenantSource};
