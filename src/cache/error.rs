//! Error types for the local review comment cache.

use thiserror::Error;

/// Errors returned while reading or writing a cached comment set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// No cached comment set exists for the key.
    #[error("no cached review comments for {key}")]
    NotFound {
        /// Cache key that was looked up.
        key: String,
    },

    /// The cache file exists but could not be read or parsed.
    #[error("failed to read review comment cache '{path}': {message}")]
    Read {
        /// Path of the cache file.
        path: String,
        /// Error detail from the filesystem or JSON parser.
        message: String,
    },

    /// The comment set could not be serialised or written.
    #[error("failed to write review comment cache '{path}': {message}")]
    Write {
        /// Path of the cache file.
        path: String,
        /// Error detail from the filesystem or JSON serialiser.
        message: String,
    },
}
