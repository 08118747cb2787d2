//! Request ID middleware for log correlation.
//!
//! Every request gets an id: the `x-request-id` header when an upstream
//! proxy already assigned one, a fresh UUID v4 otherwise. The id lands in
//! the request span and on the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a request id to the request span and the response headers.
///
/// An incoming `x-request-id` header wins over generating a new id, so a
/// trace started upstream stays one trace across the hop.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    // The span carries an empty request_id field until this records it
    Span::current().record("request_id", &request_id);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
