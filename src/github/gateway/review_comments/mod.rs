//! Gateway for listing repository-wide pull request review comments.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::IntakeError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::RawComment;
use crate::github::pagination::{CommentPage, PageRequest, page_number};

use super::ReviewCommentSource;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed source of review comment pages.
pub struct OctocrabReviewCommentSource {
    client: Octocrab,
}

impl OctocrabReviewCommentSource {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository locator.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, IntakeError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl ReviewCommentSource for OctocrabReviewCommentSource {
    /// Fetches a single page of review comments.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError`] when any of the following occur:
    ///
    /// - **Network/HTTP failures** while talking to the GitHub API.
    /// - **Authentication errors** for an invalid or under-scoped token.
    /// - **Rate limiting**, surfaced as [`IntakeError::RateLimitExceeded`].
    /// - **Deserialisation errors** when an item is not a review comment.
    async fn review_comment_page(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<CommentPage, IntakeError> {
        let page_str = request.page().to_string();
        let per_page_str = request.per_page().to_string();
        let query_params = [
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page: Page<RawComment> = self
            .client
            .get(locator.review_comments_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("review comments", &error))?;

        let next_page = page.next.as_ref().and_then(page_number);
        let last_page = page.last.as_ref().and_then(page_number);

        Ok(CommentPage {
            comments: page.items,
            next_page,
            last_page,
        })
    }
}
