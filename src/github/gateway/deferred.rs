//! Review comment source whose construction waits for the first request.
//!
//! A warm cache never asks for a page, so credentials are only resolved
//! when GitHub actually has to be contacted.

use std::sync::OnceLock;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryLocator;
use crate::github::pagination::{CommentPage, PageRequest};

use super::ReviewCommentSource;

/// Builds the inner source on the first page request and reuses it after.
///
/// A failed build is returned to the caller and retried on the next
/// request.
pub struct DeferredReviewCommentSource<Inner, Factory>
where
    Inner: ReviewCommentSource,
    Factory: Fn() -> Result<Inner, IntakeError> + Send + Sync,
{
    factory: Factory,
    inner: OnceLock<Inner>,
}

impl<Inner, Factory> DeferredReviewCommentSource<Inner, Factory>
where
    Inner: ReviewCommentSource,
    Factory: Fn() -> Result<Inner, IntakeError> + Send + Sync,
{
    /// Wraps `factory`, which is not called until a page is requested.
    #[must_use]
    pub const fn new(factory: Factory) -> Self {
        Self {
            factory,
            inner: OnceLock::new(),
        }
    }

    fn inner(&self) -> Result<&Inner, IntakeError> {
        if let Some(inner) = self.inner.get() {
            return Ok(inner);
        }
        let built = (self.factory)()?;
        Ok(self.inner.get_or_init(move || built))
    }
}

#[async_trait]
impl<Inner, Factory> ReviewCommentSource for DeferredReviewCommentSource<Inner, Factory>
where
    Inner: ReviewCommentSource,
    Factory: Fn() -> Result<Inner, IntakeError> + Send + Sync,
{
    async fn review_comment_page(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<CommentPage, IntakeError> {
        self.inner()?.review_comment_page(locator, request).await
    }
}
