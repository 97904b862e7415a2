//! Request-pipeline middleware.

pub mod route_info;

pub use route_info::route_info_middleware;
