//! Canned JSON payloads.
//!
//! # Data Flow
//! ```text
//! RouteRule (matched)
//!     → Fixture::render(target)
//!     → read.rs (GET payloads) / write.rs (POST payloads)
//!     → serde_json::Value
//! ```
//!
//! # Design Decisions
//! - Payloads are built per request; only timestamp fields vary
//! - Key order follows insertion order (`preserve_order`)
//! - No payload reads request content beyond the raw target

pub mod read;
pub mod write;

use serde_json::{json, Map, Value};

/// Produces the body for a matched route.
#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    /// Build the body from the raw request target.
    Generate(fn(&str) -> Value),
    /// `{"message": "<verb> successful"}`.
    Message(&'static str),
    /// `{"<resource>": []}`.
    EmptyList(&'static str),
}

impl Fixture {
    /// Render the JSON body for the given request target.
    pub fn render(&self, target: &str) -> Value {
        match self {
            Fixture::Generate(generate) => generate(target),
            Fixture::Message(verb) => json!({ "message": format!("{} successful", verb) }),
            Fixture::EmptyList(resource) => {
                let mut body = Map::new();
                body.insert((*resource).to_string(), Value::Array(Vec::new()));
                Value::Object(body)
            }
        }
    }
}

/// Current time as an RFC 3339 string with microsecond precision.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
