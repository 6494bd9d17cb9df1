//! End-to-end ranking of a repository's reviewers.
//!
//! The pipeline fetches comments (cache first), scores every body once,
//! rolls the scores up per author and keeps the busiest commenters. All
//! collaborators are borrowed, so tests can substitute any of them.

use tracing::info;

use crate::cache::CommentStore;
use crate::error::PersentError;
use crate::github::{CommentFetcher, RepositoryLocator, ReviewCommentSource};
use crate::sentiment::{SentimentClassifier, score_comments};
use crate::stats::{AuthorAggregate, TOP_COMMENTERS, aggregate, top_n};

/// Ranks a repository's review commenters by volume and sentiment.
pub struct ReviewerRanking<'a, Source, Store, Classifier>
where
    Source: ReviewCommentSource,
    Store: CommentStore,
    Classifier: SentimentClassifier + ?Sized,
{
    fetcher: CommentFetcher<'a, Source, Store>,
    classifier: &'a Classifier,
    limit: usize,
}

impl<'a, Source, Store, Classifier> ReviewerRanking<'a, Source, Store, Classifier>
where
    Source: ReviewCommentSource,
    Store: CommentStore,
    Classifier: SentimentClassifier + ?Sized,
{
    /// Creates a ranking that keeps the top [`TOP_COMMENTERS`] authors.
    #[must_use]
    pub const fn new(fetcher: CommentFetcher<'a, Source, Store>, classifier: &'a Classifier) -> Self {
        Self {
            fetcher,
            classifier,
            limit: TOP_COMMENTERS,
        }
    }

    /// Overrides how many authors are kept.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Runs the pipeline for `locator`.
    ///
    /// Nothing is returned unless every stage succeeds, so a partial
    /// ranking is never produced.
    ///
    /// # Errors
    ///
    /// Returns [`PersentError::RemoteFetch`], [`PersentError::CacheRead`] or
    /// [`PersentError::CacheWrite`] when the comments cannot be obtained and
    /// [`PersentError::Classification`] when a comment cannot be scored.
    pub async fn run(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<AuthorAggregate>, PersentError> {
        let comments = self.fetcher.fetch(locator).await?;
        let scored = score_comments(self.classifier, &comments)?;
        let aggregates = aggregate(scored, self.classifier.score_max());
        info!(
            comments = comments.len(),
            authors = aggregates.len(),
            "aggregated review comment sentiment"
        );

        Ok(top_n(aggregates, self.limit))
    }
}
