use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UtilError {
    #[error("duration must not be negative, got {0} seconds")]
    NegativeDuration(i64),
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}
