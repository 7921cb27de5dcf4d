//! Error types for the search engine.
//!
//! Field-level parse problems never surface here; the numeric extractors are
//! total. These variants cover filter-set validation and collaborator
//! failures. The orchestrator converts every one of them into an empty,
//! zero-count result page, so callers of `search` never see an `Err`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Invalid value for filter '{name}': {reason}")]
    InvalidFilterValue { name: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
