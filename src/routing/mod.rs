//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, raw target)
//!     → router.rs (ordered rule scan)
//!     → matcher.rs (evaluate path pattern)
//!     → fixtures (render JSON body)
//!     → Return: Dispatch or None (method has no rules)
//!
//! Route Table (at startup):
//!     RouteTable::builtin()
//!     → Freeze as immutable table shared via Arc
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - No regex in hot path (exact/prefix/suffix only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;

pub use matcher::PathPattern;
pub use router::{Dispatch, RouteRule, RouteTable};
