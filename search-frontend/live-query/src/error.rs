use thiserror::Error;

/// Why a search request produced no body. Never shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed {0}")]
    Network(String),
    #[error("Server answered with status {0}")]
    Status(u16),
    #[error("Unable to read response body {0}")]
    Body(String),
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for FetchError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("No global window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Page has no element with id {0:?}")]
    MissingElement(&'static str),
    #[error("Element {0:?} is not an input")]
    NotAnInput(&'static str),
    #[error("Javascript error {0}")]
    Js(String),
}
