use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("IO Error {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid score {value:?} on line {line}")]
    InvalidScore { line: usize, value: String },
    #[error("q must be at least 1")]
    ZeroQ,
}
