//! Top-level error type for a persent run.

use thiserror::Error;

use crate::cache::CacheError;
use crate::github::{FetchError, IntakeError};
use crate::sentiment::ClassifierError;

/// Every way a run can fail. All of them are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersentError {
    /// The command line did not name a repository.
    #[error("usage: persent owner repo")]
    Usage,

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// GitHub could not supply the review comments.
    #[error(transparent)]
    RemoteFetch(IntakeError),

    /// The cached comment set is unreadable or malformed.
    #[error(transparent)]
    CacheRead(CacheError),

    /// The fetched comment set could not be cached.
    #[error(transparent)]
    CacheWrite(CacheError),

    /// The sentiment model could not be restored.
    #[error(transparent)]
    ModelInit(ClassifierError),

    /// A comment could not be scored.
    #[error(transparent)]
    Classification(ClassifierError),

    /// Writing the report failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<IntakeError> for PersentError {
    fn from(error: IntakeError) -> Self {
        Self::RemoteFetch(error)
    }
}

impl From<CacheError> for PersentError {
    fn from(error: CacheError) -> Self {
        match error {
            CacheError::Write { .. } => Self::CacheWrite(error),
            CacheError::NotFound { .. } | CacheError::Read { .. } => Self::CacheRead(error),
        }
    }
}

impl From<FetchError> for PersentError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Remote(intake) => intake.into(),
            FetchError::Cache(cache) => cache.into(),
        }
    }
}

impl From<ClassifierError> for PersentError {
    fn from(error: ClassifierError) -> Self {
        match error {
            ClassifierError::ModelInit { .. } => Self::ModelInit(error),
            ClassifierError::Scoring { .. } => Self::Classification(error),
        }
    }
}
