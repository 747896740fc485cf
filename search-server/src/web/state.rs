use axum::extract::FromRef;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::search_service::SearchService;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) search_service: SearchService,
    pub(crate) static_dir: StaticDir,
}

/// Directory the top level page and its assets are read from.
#[derive(Clone, Debug)]
pub(crate) struct StaticDir(Arc<PathBuf>);

impl StaticDir {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self(Arc::new(path.into()))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.0
    }
}

impl FromRef<WebState> for SearchService {
    fn from_ref(input: &WebState) -> Self {
        input.search_service.clone()
    }
}

impl FromRef<WebState> for StaticDir {
    fn from_ref(input: &WebState) -> Self {
        input.static_dir.clone()
    }
}
