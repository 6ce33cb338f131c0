//! Diagnostic route.
//!
//! The upstream service registered its status route against a full URL
//! instead of a path, which is almost certainly a defect (the intended path
//! was `/`). It is preserved verbatim here: routers match on the request
//! target, so only a request whose raw target equals the full string can
//! reach the handler, and `GET /` falls through to 404.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Route string the status probe is registered under, kept verbatim.
pub const STATUS_ROUTE: &str = "https://healthsystemapi.onrender.com/";

/// Fallback handler: serves the status probe for a matching GET, default
/// 404 for everything else.
pub async fn probe(req: Request) -> Response {
    if req.method() == Method::GET && req.uri().to_string() == STATUS_ROUTE {
        return "Backend is running".into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}
