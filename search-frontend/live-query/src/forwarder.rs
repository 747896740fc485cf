use std::cell::Cell;

use log::debug;

use crate::config::{ForwarderConfig, ResponseOrdering};
use crate::error::FetchError;
use crate::request::{request_url, PageOrigin};
use crate::surface::ResultSurface;
use crate::transport::QueryTransport;

/// What became of a single forwarded keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The response body now fills the result element.
    Applied,
    /// A response to a newer request had already been shown.
    Stale,
    /// The request failed and the result element was left alone.
    Dropped(FetchError),
}

/// Sends the input's text to the search api on every keystroke and shows whatever comes back.
///
/// Single threaded: requests run concurrently on one event loop and nothing is
/// cancelled. Sequence numbers are only consulted with
/// [`ResponseOrdering::DiscardStale`].
pub struct LiveQueryForwarder<T, S> {
    transport: T,
    surface: S,
    origin: PageOrigin,
    config: ForwarderConfig,
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl<T, S> LiveQueryForwarder<T, S>
where
    T: QueryTransport,
    S: ResultSurface,
{
    pub fn new(transport: T, surface: S, origin: PageOrigin, config: ForwarderConfig) -> Self {
        Self {
            transport,
            surface,
            origin,
            config,
            issued: Cell::new(0),
            applied: Cell::new(0),
        }
    }

    /// Shows the placeholder. Run once, before any keystroke is forwarded.
    pub fn initialize(&self) {
        self.surface.set_inner_html(&self.config.placeholder);
    }

    pub fn request_url(&self, query: &str) -> String {
        request_url(&self.origin, &self.config, query)
    }

    /// Requests results for `query` and writes the body into the result element once it arrives.
    ///
    /// The query is sent as typed, empty or not.
    pub async fn forward(&self, query: &str) -> Outcome {
        let sequence = self.issued.get() + 1;
        self.issued.set(sequence);
        let url = self.request_url(query);
        debug!("{url}");

        let body = match self.transport.get_text(&url).await {
            Ok(body) => body,
            Err(e) => {
                debug!("no result for {url}: {e}");
                return Outcome::Dropped(e);
            }
        };
        debug!("{body}");

        if self.config.ordering == ResponseOrdering::DiscardStale && sequence < self.applied.get() {
            debug!("discarding response #{sequence}, #{} is already shown", self.applied.get());
            return Outcome::Stale;
        }
        self.surface.set_inner_html(&body);
        self.applied.set(self.applied.get().max(sequence));
        Outcome::Applied
    }
}
