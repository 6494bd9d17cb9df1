//! Gateways for listing review comments through Octocrab.
//!
//! The trait lets the fetch loop run against a mock in tests while the
//! Octocrab implementation handles real HTTP requests.

mod client;
mod deferred;
mod error_mapping;
mod review_comments;

pub use deferred::DeferredReviewCommentSource;
pub use review_comments::OctocrabReviewCommentSource;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryLocator;
use crate::github::pagination::{CommentPage, PageRequest};

/// Source of paginated pull request review comments for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommentSource: Send + Sync {
    /// Fetch one page of review comments across all pull requests.
    async fn review_comment_page(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<CommentPage, IntakeError>;
}
