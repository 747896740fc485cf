use std::sync::Arc;

use qgram_index::{normalize, QGramIndex};
use search_api_types::{SearchHit, RESULT_LIMIT};
use tracing::debug;

use crate::web_metrics::record_search;

#[derive(Clone)]
pub(crate) struct SearchService {
    index: Arc<QGramIndex>,
}

impl SearchService {
    pub(crate) fn new(index: QGramIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// Best matches for the query, allowing one edit per four query characters.
    pub(crate) fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = normalize(query);
        let delta = query.len() / 4;
        let result = self.index.find_matches(&query, delta);
        debug!(
            "query {query:?}: {} matches, {} ped computations",
            result.matches.len(),
            result.ped_computations
        );
        record_search(result.matches.len(), result.ped_computations);
        result
            .matches
            .iter()
            .take(RESULT_LIMIT)
            .map(|m| SearchHit {
                name: m.entity.name.clone(),
                score: m.entity.score,
                description: m.entity.description.clone(),
            })
            .collect()
    }

    /// The response body of the search api: one line per hit.
    pub(crate) fn render(&self, query: &str) -> String {
        self.search(query).iter().map(ToString::to_string).collect()
    }
}
