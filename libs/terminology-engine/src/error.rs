//! Error types for the mapping engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied input is unusable (too-short search term,
    /// missing code/system, both dual-lookup slots absent). Never
    /// retried.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An entity lookup inside the store failed. The engine's own
    /// operations prefer empty results over this where the contract
    /// says so; it is propagated as-is when the store raises it.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store could not be reached. Distinct from "no data" so
    /// callers can decide whether to retry.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<ayulink_store::Error> for Error {
    fn from(err: ayulink_store::Error) -> Self {
        match err {
            ayulink_store::Error::NotFound(msg) => Error::NotFound(msg),
            ayulink_store::Error::Unavailable(msg) => Error::StoreUnavailable(msg),
            ayulink_store::Error::Conflict(msg) | ayulink_store::Error::InvalidResource(msg) => {
                Error::InvalidArgument(msg)
            }
        }
    }
}
