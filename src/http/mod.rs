//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, raw target extraction)
//!     → routing (first matching rule)
//!     → response.rs (pretty JSON, content type)
//!     → CORS header layer
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::JsonFixture;
pub use server::{build_router, AppState, MockServer, ServerError};
