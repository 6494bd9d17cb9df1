//! Cache-first retrieval of a repository's complete review comment set.

use thiserror::Error;
use tracing::{debug, info};

use super::error::IntakeError;
use super::gateway::ReviewCommentSource;
use super::locator::RepositoryLocator;
use super::models::RawComment;
use super::pagination::PageRequest;
use crate::cache::{CacheError, CacheKey, CommentStore};

/// Errors raised while assembling a repository's comment set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// GitHub could not supply a page of comments.
    #[error(transparent)]
    Remote(#[from] IntakeError),

    /// The local cache could not be read or written.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Loads review comments from the cache, or from GitHub on a cache miss.
pub struct CommentFetcher<'a, Source, Store>
where
    Source: ReviewCommentSource,
    Store: CommentStore,
{
    source: &'a Source,
    store: &'a Store,
}

impl<'a, Source, Store> CommentFetcher<'a, Source, Store>
where
    Source: ReviewCommentSource,
    Store: CommentStore,
{
    /// Create a fetcher over the given gateway and store.
    #[must_use]
    pub const fn new(source: &'a Source, store: &'a Store) -> Self {
        Self { source, store }
    }

    /// Returns every review comment in the repository.
    ///
    /// A cached set is returned unchanged without contacting GitHub. On a
    /// miss, all pages are fetched and the full set is cached before it is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Remote`] when any page fails to load and
    /// [`FetchError::Cache`] when the cache is unreadable or the fetched set
    /// cannot be written. Nothing is cached after a remote failure.
    pub async fn fetch(&self, locator: &RepositoryLocator) -> Result<Vec<RawComment>, FetchError> {
        let key = CacheKey::new(locator.owner().as_str(), locator.repository().as_str());

        match self.store.load(&key) {
            Ok(comments) => {
                info!(%key, total = comments.len(), "loaded review comments from local cache");
                return Ok(comments);
            }
            Err(CacheError::NotFound { .. }) => {}
            Err(error) => return Err(error.into()),
        }

        info!(%key, "fetching review comments from GitHub");
        let comments = self.fetch_all_pages(locator).await?;
        self.store.save(&key, &comments)?;
        info!(%key, total = comments.len(), "cached review comments");

        Ok(comments)
    }

    async fn fetch_all_pages(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<RawComment>, IntakeError> {
        let mut request = PageRequest::first();
        let mut comments = Vec::new();

        loop {
            let page = self.source.review_comment_page(locator, request).await?;
            debug!(
                page = request.page(),
                count = page.comments.len(),
                last_page = ?page.last_page,
                "fetched review comment page"
            );
            comments.extend(page.comments);

            let Some(next_page) = page.next_page else {
                break;
            };
            if next_page <= request.page() {
                return Err(IntakeError::InvalidPagination {
                    message: format!(
                        "GitHub advertised page {next_page} after page {current}",
                        current = request.page()
                    ),
                });
            }
            request = request.with_page(next_page)?;
        }

        Ok(comments)
    }
}
