//! Response rendering.
//!
//! # Responsibilities
//! - Serialize fixture bodies as pretty-printed JSON (2-space indent)
//! - Set the JSON content type
//! - Answer methods without rules
//!
//! # Design Decisions
//! - CORS and request-id headers are added by middleware, not here
//! - A body that fails to serialize is logged and turned into a 500

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Content type of every fixture response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fixture body with its status code.
#[derive(Debug, Clone)]
pub struct JsonFixture {
    pub status: StatusCode,
    pub body: Value,
}

impl JsonFixture {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for JsonFixture {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.body) {
            Ok(text) => {
                let mut response = Response::new(Body::from(text));
                *response.status_mut() = self.status;
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                );
                response
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize fixture body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Response for a method that has no route rules at all.
pub fn unsupported_method(method: &Method) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        format!("Unsupported method ('{}')", method),
    )
        .into_response()
}
