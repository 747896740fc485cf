use axum::extract::{RawQuery, State};
use axum::http::header;
use axum::response::IntoResponse;
use search_api_types::SearchQuery;
use tracing::debug;

use crate::search_service::SearchService;

/// `GET /api?query=...`, answered with plain text lines, best match first.
///
/// The query string is not split on `&`; see [`SearchQuery::from_raw_query`].
pub(crate) async fn search(
    State(service): State<SearchService>,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let SearchQuery { query } = SearchQuery::from_raw_query(raw.as_deref());
    let body = service.render(&query);
    debug!("{query:?} -> {body:?}");
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
