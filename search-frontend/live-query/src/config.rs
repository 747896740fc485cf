use search_api_types::{API_PATH, QUERY_PARAM};

/// Text shown in the result element before the first response arrives.
pub const RESULT_PLACEHOLDER: &str = "42;";

/// How the query text is placed into the request url.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Appended exactly as typed. Characters like `&`, `#` or `+` change the meaning of the url.
    #[default]
    Raw,
    /// Percent encoded, so the server sees exactly what was typed.
    Percent,
}

/// What happens when responses resolve in a different order than they were requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Every successful response is shown; whichever resolves last stays visible.
    #[default]
    LastResolvedWins,
    /// Responses to requests older than the newest one already shown are dropped.
    DiscardStale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwarderConfig {
    pub placeholder: String,
    pub api_path: String,
    pub query_param: String,
    pub encoding: QueryEncoding,
    pub ordering: ResponseOrdering,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            placeholder: RESULT_PLACEHOLDER.to_string(),
            api_path: API_PATH.to_string(),
            query_param: QUERY_PARAM.to_string(),
            encoding: QueryEncoding::default(),
            ordering: ResponseOrdering::default(),
        }
    }
}
