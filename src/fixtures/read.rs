//! Payloads served to GET requests.

use serde_json::{json, Value};

use super::timestamp_now;

/// Targets advertised by the welcome payload.
pub const WELCOME_ENDPOINTS: [&str; 5] = [
    "/health",
    "/api/v1/instance",
    "/api/v1/timelines/public",
    "/api/v1/accounts/1",
    "/api/v1/search?q=test",
];

pub fn health(_target: &str) -> Value {
    json!({
        "status": "ok",
        "message": "Health check passed",
        "timestamp": timestamp_now(),
    })
}

pub fn instance(_target: &str) -> Value {
    json!({
        "version": "1.0.0",
        "name": "Rustodon Test Server",
        "description": "Test server for API validation",
    })
}

pub fn public_timeline(_target: &str) -> Value {
    json!({
        "statuses": [],
        "next": null,
        "prev": null,
    })
}

/// Same account for every id.
pub fn account(_target: &str) -> Value {
    json!({
        "id": "1",
        "username": "testuser",
        "display_name": "Test User",
        "created_at": "2025-01-01T00:00:00Z",
    })
}

pub fn search(_target: &str) -> Value {
    json!({
        "accounts": [],
        "statuses": [],
        "hashtags": [],
    })
}

pub fn welcome(_target: &str) -> Value {
    json!({
        "message": "Welcome to Rustodon Test Server",
        "endpoints": WELCOME_ENDPOINTS,
    })
}
