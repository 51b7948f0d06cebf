use thiserror::Error;

/// Failures of the spin counter store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored value for {key} is not a counter: {value:?}")]
    Corrupt { key: String, value: String },
    #[error("failed to write counter: {0}")]
    Write(String),
}
