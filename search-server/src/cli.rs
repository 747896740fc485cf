use std::path::PathBuf;

use clap::Parser;

/// Serves fuzzy prefix search over an entity file, plus the page that queries it.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Args {
    /// Tab separated entity file; the first line holds column headers.
    #[arg(long, env = "ENTITIES_FILE")]
    pub(crate) entities: PathBuf,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub(crate) port: u16,
    /// Directory holding index.html and the other top level files.
    #[arg(long, env = "STATIC_DIR", default_value = "search-server/static")]
    pub(crate) static_dir: PathBuf,
    /// wasm-bindgen output of the live-query crate, served under /pkg.
    #[arg(long, env = "PKG_DIR", default_value = "search-frontend/live-query/pkg")]
    pub(crate) pkg_dir: PathBuf,
    #[arg(long = "q", env = "QGRAM_SIZE", default_value_t = 3)]
    pub(crate) q: usize,
    /// Also index and match entity synonyms.
    #[arg(long, env = "WITH_SYNONYMS")]
    pub(crate) with_synonyms: bool,
    /// Expose prometheus metrics on this port.
    #[arg(long, env = "METRICS_PORT")]
    pub(crate) metrics_port: Option<u16>,
}
