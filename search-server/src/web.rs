pub mod error;
mod search;
mod state;
mod static_content;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use search_api_types::API_PATH;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub(crate) use self::state::{StaticDir, WebState};
use crate::web_metrics::track_metrics;

pub(crate) fn router(state: WebState, pkg_dir: &Path) -> Router {
    Router::new()
        .route("/", get(static_content::index))
        .route(API_PATH, get(search::search))
        .route("/{file}", get(static_content::static_file))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(static_content::not_allowed)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(app: Router, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind {addr}"))?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Unable to listen for shutdown signal {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::{router, StaticDir, WebState};
    use crate::search_service::test::service;

    struct TestSite {
        app: Router,
        _static_dir: TempDir,
        _pkg_dir: TempDir,
    }

    fn site() -> TestSite {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<input id=\"input\"><div id=\"result\"></div>",
        )
        .unwrap();
        std::fs::write(static_dir.path().join("style.css"), "body {}").unwrap();
        let pkg_dir = tempfile::tempdir().unwrap();
        std::fs::write(pkg_dir.path().join("live_query.js"), "export default 1;").unwrap();

        let state = WebState {
            search_service: service(),
            static_dir: StaticDir::new(static_dir.path()),
        };
        TestSite {
            app: router(state, pkg_dir.path()),
            _static_dir: static_dir,
            _pkg_dir: pkg_dir,
        }
    }

    async fn get(site: &TestSite, uri: &str) -> (StatusCode, Option<String>, String) {
        request(site, Method::GET, uri).await
    }

    async fn request(site: &TestSite, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = site
            .app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_api_query() {
        let site = site();
        let (status, content_type, body) = get(&site, "/api?query=frei").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        let lines: Vec<_> = body.split_terminator("\t\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "freiberg;7;",
                "freienbach;6;",
                "freiburg;5;city in Germany",
                "freising;4;",
                "frei;3;an adjective"
            ]
        );
    }

    #[tokio::test]
    async fn test_api_empty_query() {
        let site = site();
        let (status, _, body) = get(&site, "/api?query=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
        let (status, _, body) = get(&site, "/api").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_api_query_is_not_split_on_ampersand() {
        let site = site();
        let (status, _, joined) = get(&site, "/api?query=freiburg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(joined, "freiburg;5;city in Germany\t\r\nfreiberg;7;\t\r\n");
        let (status, _, split) = get(&site, "/api?query=frei&burg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(split, joined);

        let (status, _, _) = get(&site, "/api?query=a&query=frei").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _, escaped) = get(&site, "/api?query=frei%26burg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(escaped, joined);
    }

    #[tokio::test]
    async fn test_api_is_get_only() {
        let site = site();
        let (status, _, _) = request(&site, Method::POST, "/api?query=frei").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_page_and_static_files() {
        let site = site();
        let (status, content_type, body) = get(&site, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html"));
        assert!(body.contains("id=\"result\""));

        let (status, content_type, body) = get(&site, "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css"));
        assert_eq!(body, "body {}");

        let (status, _, body) = get(&site, "/pkg/live_query.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_missing_and_nested_files() {
        let site = site();
        let (status, _, _) = get(&site, "/missing.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _, body) = get(&site, "/nested/style.css").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "Not allowed");
        let (status, _, _) = get(&site, "/..%2Fsecret").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
