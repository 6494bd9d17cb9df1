//! Local cache of fetched review comments.
//!
//! The cache memoises one repository's complete comment set in a single JSON
//! file named after the repository. A cached set is authoritative: it is
//! never refreshed or expired, and deleting the file is the only way to force
//! a new fetch. The [`CommentStore`] trait isolates that policy so the fetch
//! loop can be exercised against a test double.

mod error;
mod json_file;

use std::fmt;

pub use error::CacheError;
pub use json_file::JsonFileCommentStore;

use crate::github::models::RawComment;

/// Key naming one repository's cached comment set.
///
/// # Example
///
/// ```
/// use persent::CacheKey;
///
/// let key = CacheKey::new("octo", "repo");
/// assert_eq!(key.to_string(), "octo.repo");
/// assert_eq!(key.file_name(), "octo.repo.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    owner: String,
    repository: String,
}

impl CacheKey {
    /// Derives the key for an owner and repository pair.
    #[must_use]
    pub fn new(owner: &str, repository: &str) -> Self {
        Self {
            owner: owner.to_owned(),
            repository: repository.to_owned(),
        }
    }

    /// File name the comment set is stored under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{self}.json")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.repository)
    }
}

/// Durable storage for complete review comment sets.
#[cfg_attr(test, mockall::automock)]
pub trait CommentStore: Send + Sync {
    /// Reads the comment set cached under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] when nothing is cached under the key
    /// and [`CacheError::Read`] when the stored data is unreadable or
    /// malformed.
    fn load(&self, key: &CacheKey) -> Result<Vec<RawComment>, CacheError>;

    /// Stores `comments` under `key`, replacing any previous set.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Write`] when the set cannot be persisted.
    fn save(&self, key: &CacheKey, comments: &[RawComment]) -> Result<(), CacheError>;
}
