//! Payloads served to POST requests.

use serde_json::{json, Value};

use super::timestamp_now;

pub fn register(_target: &str) -> Value {
    json!({
        "token": "test_token_123",
        "user_id": "1",
        "message": "Registration successful",
    })
}

pub fn login(_target: &str) -> Value {
    json!({
        "token": "test_token_123",
        "user_id": "1",
        "message": "Login successful",
    })
}

pub fn create_status(_target: &str) -> Value {
    json!({
        "id": "1",
        "content": "Test status",
        "created_at": timestamp_now(),
    })
}

pub fn upload_media(_target: &str) -> Value {
    json!({
        "id": "1",
        "type": "image",
        "url": "https://example.com/test.jpg",
    })
}

/// Fallback for unmatched POST targets. Still served with 200.
pub fn not_implemented(target: &str) -> Value {
    json!({
        "error": "Endpoint not implemented",
        "path": target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_payloads_share_token() {
        assert_eq!(register("")["token"], login("")["token"]);
        assert_eq!(register("")["message"], "Registration successful");
        assert_eq!(login("")["message"], "Login successful");
    }

    #[test]
    fn test_status_created_at_is_current() {
        let body = create_status("/api/v1/statuses");
        let created = chrono::DateTime::parse_from_rfc3339(body["created_at"].as_str().unwrap()).unwrap();
        let skew = chrono::Utc::now().signed_duration_since(created);
        assert!(skew.num_seconds().abs() < 5);
    }

    #[test]
    fn test_not_implemented_echoes_query() {
        let body = not_implemented("/api/v1/polls?x=1");
        assert_eq!(body, json!({ "error": "Endpoint not implemented", "path": "/api/v1/polls?x=1" }));
    }
}
