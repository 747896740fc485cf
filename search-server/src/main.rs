mod cli;
mod search_service;
mod web;
mod web_metrics;

use anyhow::{Context, Result};
use clap::Parser;
use qgram_index::QGramIndex;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::search_service::SearchService;
use crate::web::{StaticDir, WebState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut index = QGramIndex::new(args.q, args.with_synonyms)?;
    index
        .build_from_file(&args.entities)
        .with_context(|| format!("Unable to build index from {}", args.entities.display()))?;

    if let Some(port) = args.metrics_port {
        let handle = web_metrics::setup_metrics_recorder()?;
        tokio::spawn(async move {
            if let Err(e) = web_metrics::start_metrics_server(handle, port).await {
                error!("Metrics server stopped {e:?}");
            }
        });
    }

    let state = WebState {
        search_service: SearchService::new(index),
        static_dir: StaticDir::new(args.static_dir),
    };
    web::start_web(web::router(state, &args.pkg_dir), args.port).await
}
