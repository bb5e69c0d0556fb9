//! Access logging.
//!
//! One `http_request` span per request carrying method, URI and the request
//! id assigned by [`set_request_id_layer`](super::set_request_id_layer).
//! When the response is ready the span gains status, latency and response
//! size, and a single `info` event is emitted inside it.

use std::time::Duration;

use axum::body::{Body, HttpBody};
use axum::http::{Request, Response, header::CONTENT_LENGTH};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, OnResponse, TraceLayer};
use tracing::{Level, Span};

/// Span constructor used by [`access_log_layer`].
pub type MakeSpan = fn(&Request<Body>) -> Span;

/// Response hook used by [`access_log_layer`].
pub type RecordResponse = fn(&Response<Body>, Duration, &Span);

/// The configured access log layer.
pub type AccessLogLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan, DefaultOnRequest, RecordResponse>;

/// Build the access log layer.
#[must_use]
pub fn access_log_layer() -> AccessLogLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_response(record_response as RecordResponse)
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(super::REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
        status = tracing::field::Empty,
        latency_ms = tracing::field::Empty,
        response_bytes = tracing::field::Empty,
    )
}

fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status", response.status().as_u16());
    span.record(
        "latency_ms",
        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
    );
    if let Some(size) = response_size(response) {
        span.record("response_bytes", size);
    }
    DefaultOnResponse::new()
        .level(Level::INFO)
        .on_response(response, latency, span);
}

/// Size of the response body, from `content-length` or the body's exact size hint.
fn response_size(response: &Response<Body>) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}
