//! Rustodon Mock API Server Library
//!
//! Serves canned JSON fixtures for a fixed set of Mastodon-style endpoints so
//! client code can be exercised without the real backend.

pub mod config;
pub mod fixtures;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::MockServerConfig;
pub use http::MockServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
