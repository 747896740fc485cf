use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Response, StatusCode};

use crate::web::error::WebError;
use crate::web::state::StaticDir;

async fn get_file(dir: &StaticDir, name: &str) -> Result<Response<Body>, WebError> {
    let path = dir.path().join(name);
    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(WebError::NotFound(name.to_string()));
    }
    let contents = tokio::fs::read(&path).await?;
    let mime_type = mime_guess::from_path(&path).first_or_text_plain();
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(
            header::CACHE_CONTROL,
            #[cfg(not(debug_assertions))]
            HeaderValue::from_static("public, max-age=3600"),
            #[cfg(debug_assertions)]
            HeaderValue::from_static("no-cache"),
        )
        .body(Body::from(contents))?)
}

pub(crate) async fn index(State(dir): State<StaticDir>) -> Result<Response<Body>, WebError> {
    get_file(&dir, "index.html").await
}

/// Only files directly inside the static dir are served.
pub(crate) async fn static_file(
    State(dir): State<StaticDir>,
    Path(file): Path<String>,
) -> Result<Response<Body>, WebError> {
    if file.is_empty() || file == "." || file == ".." || file.contains(['/', '\\']) {
        return Err(WebError::NotAllowed);
    }
    get_file(&dir, &file).await
}

/// Anything deeper than one path segment that no other route claimed.
pub(crate) async fn not_allowed() -> WebError {
    WebError::NotAllowed
}
