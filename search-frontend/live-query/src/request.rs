use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{ForwarderConfig, QueryEncoding};

/// Everything outside the unreserved set of RFC 3986.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Host and port the page was loaded from, as the browser reports them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrigin {
    pub hostname: String,
    /// Empty when the page was served from the scheme's default port.
    pub port: String,
}

impl PageOrigin {
    pub fn new(hostname: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.into(),
        }
    }
}

/// Builds `http://{host}:{port}{api_path}?{param}={query}`.
///
/// The scheme is always `http` and the port separator is always written, even when
/// the page reports an empty port.
pub fn request_url(origin: &PageOrigin, config: &ForwarderConfig, query: &str) -> String {
    let value: Cow<'_, str> = match config.encoding {
        QueryEncoding::Raw => Cow::Borrowed(query),
        QueryEncoding::Percent => utf8_percent_encode(query, QUERY_VALUE).into(),
    };
    format!(
        "http://{}:{}{}?{}={}",
        origin.hostname, origin.port, config.api_path, config.query_param, value
    )
}
