// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Wraps every HTTP request in a span carrying method, path, and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{body::Body, Router};
use http::{Request, Response};
use std::time::Duration;
use tower_http::trace::{DefaultOnRequest, TraceLayer};
use tracing::{Level, Span};

/// Header clients may use to correlate their requests with server logs
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for HTTP requests
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status_code", response.status().as_u16());
    span.record(
        "duration_ms",
        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
    );
    tracing::debug!(parent: span, "Request completed");
}

/// Wrap a router with a `tower-http` trace layer emitting one span per request
#[must_use]
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(create_request_span)
            .on_request(DefaultOnRequest::new().level(Level::DEBUG))
            .on_response(record_response),
    )
}
