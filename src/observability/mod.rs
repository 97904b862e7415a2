//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (classification counters)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, side port)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; format chosen per config
//! - Request ID flows through all log events via the trace layer
//! - Metrics are cheap (atomic increments), labeled by route kind and
//!   tenant source

pub mod logging;
pub mod metrics;
