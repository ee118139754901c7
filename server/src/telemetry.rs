//! Logging setup and per-request tracing.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Paths polled often enough that logging each hit is noise.
const QUIET_PATHS: &[&str] = &["/health"];

/// Console logging. `RUST_LOG` overrides the default `info` level.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Span for one request, keyed by the matched route.
pub fn make_span(request: &Request<Body>) -> Span {
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or(request.uri().path());

    if QUIET_PATHS.contains(&matched_path) {
        tracing::trace_span!("http_request")
    } else {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %matched_path,
        )
    }
}

pub fn on_response(response: &Response<Body>, latency: Duration, span: &Span) {
    // Quiet paths get trace-level spans; skip them
    if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
        return;
    }
    let status = response.status().as_u16();
    if status >= 500 {
        tracing::error!(
            status = %status,
            latency_ms = %latency.as_millis(),
            "request failed with server error"
        );
    } else {
        tracing::info!(
            status = %status,
            latency_ms = %latency.as_millis(),
            "request completed"
        );
    }
}

pub fn on_failure(error: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        error = %error,
        latency_ms = %latency.as_millis(),
        "request failed"
    );
}
