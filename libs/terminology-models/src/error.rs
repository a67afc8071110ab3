//! Error types for terminology models

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Duplicate concept code '{code}' in CodeSystem '{url}'")]
    DuplicateConceptCode { url: String, code: String },

    #[error("Concept '{code}' references unknown parent '{parent}' in CodeSystem '{url}'")]
    UnknownParent {
        url: String,
        code: String,
        parent: String,
    },

    #[error("ConceptMap '{url}' has no groups")]
    EmptyConceptMap { url: String },

    #[error("Mapping element '{code}' in ConceptMap '{url}' has no targets")]
    EmptyElement { url: String, code: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
