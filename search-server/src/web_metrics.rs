use std::{
    future::ready,
    net::SocketAddr,
    time::{Duration, Instant},
};

use anyhow::Context;
use axum::{
    extract::{MatchedPath, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::IntoResponse,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

const REQUESTS_TOTAL: &str = "live_search_http_requests_total";
const REQUEST_DURATION: &str = "live_search_http_requests_duration_seconds";
const SEARCH_MATCHES: &str = "live_search_matches";
const PED_COMPUTATIONS: &str = "live_search_ped_computations_total";

/// Route label for requests no route claimed. Raw paths are never used as labels.
const UNMATCHED_ROUTE: &str = "unmatched";

pub(crate) async fn track_metrics(req: Request, next: Next) -> impl IntoResponse {
    let start = Instant::now();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
        .to_owned();
    let method = req.method().clone();

    let response = next.run(req).await;
    record_request(&method, &route, response.status(), start.elapsed());
    response
}

fn record_request(method: &Method, route: &str, status: StatusCode, latency: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_owned()),
        ("status", status.as_u16().to_string()),
    ];
    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION, &labels).record(latency.as_secs_f64());
}

/// How many entities one query matched, and how much distance work it took.
pub(crate) fn record_search(matches: usize, ped_computations: usize) {
    metrics::histogram!(SEARCH_MATCHES).record(matches as f64);
    metrics::counter!(PED_COMPUTATIONS).increment(ped_computations as u64);
}

pub(crate) fn setup_metrics_recorder() -> anyhow::Result<PrometheusHandle> {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
    ];
    const MATCH_COUNTS: &[f64] = &[0.0, 1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_DURATION.to_string()),
            EXPONENTIAL_SECONDS,
        )?
        .set_buckets_for_metric(Matcher::Full(SEARCH_MATCHES.to_string()), MATCH_COUNTS)?
        .install_recorder()
        .context("Unable to install the prometheus recorder")?;
    Ok(handle)
}

fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || ready(handle.render())))
}

/// Serves `/metrics` on its own port so it stays off the public listener.
pub(crate) async fn start_metrics_server(handle: PrometheusHandle, port: u16) -> anyhow::Result<()> {
    let app = metrics_app(handle);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("metrics listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind metrics listener on {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
