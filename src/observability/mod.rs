//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (fmt layer, stdout, timestamp prefix)
//!
//! Per request:
//!     → tower_http TraceLayer span
//!     → one "Request handled" line carrying request_id, route, status
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request log line
//! - RUST_LOG overrides the configured level

pub mod logging;
