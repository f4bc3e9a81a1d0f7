//! Error taxonomy returned at the domain/storage boundary.
//!
//! Handlers never forward these to clients verbatim: each endpoint translates every
//! kind into its own fixed status code (see `transport::http::error`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("every question in the quiz pool has already been served")]
    Exhausted,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl TriviaError {
    pub fn not_found(what: impl Into<String>) -> Self {
        TriviaError::NotFound(what.into())
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        TriviaError::Validation(reason.into())
    }

    /// True for outcomes that are part of normal traffic (missing rows, bad input,
    /// finished quizzes) as opposed to infrastructure faults.
    pub fn is_expected(&self) -> bool {
        !matches!(self, TriviaError::Storage(_))
    }
}

pub type TriviaResult<T> = std::result::Result<T, TriviaError>;
