//! GitHub review comment retrieval.
//!
//! This module wraps Octocrab to page through a repository's pull request
//! review comments and pairs it with the local cache so a repository is only
//! fetched once. Errors are mapped into user-friendly variants so callers can
//! surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod fetcher;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::IntakeError;
pub use fetcher::{CommentFetcher, FetchError};
pub use gateway::{
    DeferredReviewCommentSource, OctocrabReviewCommentSource, ReviewCommentSource,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{CommentDecodeError, RawComment};
pub use pagination::{CommentPage, PageRequest};

#[cfg(test)]
pub use gateway::MockReviewCommentSource;
