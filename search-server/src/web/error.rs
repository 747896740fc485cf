use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Not allowed")]
    NotAllowed,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("IO Error {0}")]
    StdError(#[from] std::io::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::NotAllowed => StatusCode::FORBIDDEN,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_server_error() {
            error!("Error returned {self:?}");
        } else {
            debug!("{status} {self}");
        }
        (status, format!("{self}")).into_response()
    }
}
