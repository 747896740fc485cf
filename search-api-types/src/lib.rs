use std::fmt::{self, Display};

use percent_encoding::percent_decode_str;

/// Path of the search endpoint, relative to the page origin.
pub const API_PATH: &str = "/api";
/// Name of the url parameter that carries the raw query text.
pub const QUERY_PARAM: &str = "query";
/// The api never answers with more hits than this.
pub const RESULT_LIMIT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
}

impl SearchQuery {
    /// Reads the query from the part of the url after `?`.
    ///
    /// The client appends the typed text unencoded, so everything after the leading
    /// `query=` belongs to the query, including any `&` or `=`. Percent escapes are
    /// decoded; a query string that does not start with `query=` is an empty query.
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let value = raw
            .and_then(|raw| raw.strip_prefix(QUERY_PARAM))
            .and_then(|rest| rest.strip_prefix('='))
            .unwrap_or_default();
        Self {
            query: percent_decode_str(value).decode_utf8_lossy().into_owned(),
        }
    }
}

/// One line of the search response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub score: i64,
    pub description: Option<String>,
}

/// Writes `name;score;description` followed by a tab and CRLF.
impl Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{}\t\r\n",
            self.name,
            self.score,
            self.description.as_deref().unwrap_or_default()
        )
    }
}
