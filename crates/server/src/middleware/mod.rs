//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. CORS (any origin, method and header)
//! 2. Set request ID (keeps an incoming `x-request-id`, otherwise a UUID v4)
//! 3. Access log (`TraceLayer` span per request, tagged with the request ID)
//! 4. Propagate request ID (copies it onto the response)
//!
//! The Sentry layers are added around all of these in `main`.

pub mod access_log;

use axum::http::HeaderName;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub use access_log::access_log_layer;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// CORS layer allowing every origin.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assign a request ID to requests that arrive without one.
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid)
}

/// Echo the request ID on the response.
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}
