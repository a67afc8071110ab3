//! Error types for store backends

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    /// Backend failure reaching the store. Surfaced to callers as a
    /// transient failure, never masked as an empty result set.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<ayulink_models::Error> for Error {
    fn from(err: ayulink_models::Error) -> Self {
        Error::InvalidResource(err.to_string())
    }
}
