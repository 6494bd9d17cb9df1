//! Ranks a repository's reviewers and prints the report.

use std::io::Write;

use persent::{
    CommentFetcher, DeferredReviewCommentSource, IntakeError, JsonFileCommentStore,
    NaiveBayesClassifier, OctocrabReviewCommentSource, PersentConfig, PersentError,
    PersonalAccessToken, RepositoryLocator, ReviewerRanking, render, write_report,
};
use tracing::debug;

/// Runs the ranking for `owner/repo` and writes the report to `out`.
///
/// The GitHub client, and with it the token, is only needed when the cache
/// has no entry for the repository.
///
/// # Errors
///
/// Returns [`PersentError::RemoteFetch`] with [`IntakeError::MissingToken`]
/// when GitHub must be contacted and no token is configured, and propagates
/// every other pipeline failure.
/// Nothing is written on failure.
pub async fn run<W: Write>(
    config: &PersentConfig,
    owner: &str,
    repo: &str,
    out: &mut W,
) -> Result<(), PersentError> {
    let locator = RepositoryLocator::with_api_base(owner, repo, config.api_base())?;
    let source = DeferredReviewCommentSource::new(|| -> Result<_, IntakeError> {
        let token = PersonalAccessToken::new(config.resolve_token()?)?;
        OctocrabReviewCommentSource::for_token(&token, &locator)
    });
    let store = JsonFileCommentStore::new(config.cache_dir());
    let classifier = NaiveBayesClassifier::restore()?;
    debug!(
        api_base = %locator.api_base(),
        cache_dir = %store.directory(),
        "resolved ranking inputs"
    );

    let fetcher = CommentFetcher::new(&source, &store);
    let ranked = ReviewerRanking::new(fetcher, &classifier)
        .run(&locator)
        .await?;

    write_report(out, &render(&ranked)).map_err(|error| PersentError::Io {
        message: error.to_string(),
    })
}
