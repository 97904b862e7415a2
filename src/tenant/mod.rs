//! Tenant resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (Host header, headers, path)
//!     → resolver.rs (subdomain → path marker → header, first hit wins)
//!     → Return: TenantResolution + tenant-stripped path
//!     → Route classifier consumes the stripped path
//! ```
//!
//! # Design Decisions
//! - Resolution order is fixed: subdomain beats path beats header
//! - Only the path strategy rewrites the path; the others leave it untouched
//! - Absence of a tenant is a value (`source: none`), never a failure

pub mod resolver;

pub use resolver::{TenantResolution, TenantResolver, TenantSource};
