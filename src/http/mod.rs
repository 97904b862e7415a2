//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (x-request-id generation and propagation)
//!     → middleware/route_info.rs (tenant resolution + route classification)
//!     → handler (reads RouteInfo from extensions, renders it)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{uuid_request_id_layers, X_REQUEST_ID};
pub use server::{ActiveState, AppState, HttpServer};
