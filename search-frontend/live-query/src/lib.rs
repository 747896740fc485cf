//! Browser side of the live search page.
//!
//! Every keystroke in the `#input` field sends the current text to the search
//! api and the response body replaces the content of `#result`. The DOM and
//! network sit behind [`ResultSurface`] and [`QueryTransport`], so everything
//! but the wasm bindings runs natively.

mod config;
mod error;
mod forwarder;
mod request;
mod surface;
mod transport;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use config::{ForwarderConfig, QueryEncoding, ResponseOrdering, RESULT_PLACEHOLDER};
pub use error::{FetchError, StartupError};
pub use forwarder::{LiveQueryForwarder, Outcome};
pub use request::{request_url, PageOrigin};
pub use surface::ResultSurface;
pub use transport::QueryTransport;
