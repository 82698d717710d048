use thiserror::Error;

use crate::model::{UnknownCandidate, ValidationError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Config(#[from] figment::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnknownCandidate(#[from] UnknownCandidate),
    #[error("Service error: {0}")]
    Service(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl Error {
    /// Construct a `NotFound` error for the given entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
