//! # Middleware
//!
//! JSON body decoding middleware. For requests carrying a JSON content type
//! the body is buffered, decoded into a [`serde_json::Value`], and made
//! available to downstream handlers via `Extension<JsonBody>`; the raw bytes
//! are put back so the body remains readable. Other content types pass
//! through untouched.

use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;

/// Largest JSON body the middleware will buffer (100 KiB).
const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Decoded JSON request body, inserted into request extensions.
#[derive(Clone, Debug)]
pub struct JsonBody(pub serde_json::Value);

/// JSON body decoding middleware.
pub async fn parse_json_body(req: Request, next: Next) -> Response {
    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false);

    if !is_json {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let bytes = match axum::body::to_bytes(body, JSON_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    // An empty body decodes to an empty object.
    let value = if bytes.is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "rejecting malformed JSON body");
                return AppError::InvalidInput(format!("malformed JSON body: {err}"))
                    .into_response();
            }
        }
    };

    parts.extensions.insert(JsonBody(value));

    let req = Request::from_parts(parts, Body::from(bytes));
    next.run(req).await
}
