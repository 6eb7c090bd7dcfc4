//! HTTP request metrics
//!
//! Every request through the router feeds `http_requests_total` and
//! `http_request_duration_seconds` for the scrape endpoint.

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// Records one counter increment and one histogram sample per request.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    // Label with the route template, not the concrete URI, so path
    // parameters do not blow up the label space.
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str())
        .unwrap_or(request.uri().path())
        .to_string();

    let started = Instant::now();
    let response = next.run(request).await;

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "path" => route.clone()
    )
    .record(started.elapsed().as_secs_f64());
    metrics::counter!(
        "http_requests_total",
        "method" => method,
        "path" => route,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}
