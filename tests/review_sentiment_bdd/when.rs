//! When steps for reviewer ranking behavioural tests.

use camino::Utf8PathBuf;
use persent::{
    CommentFetcher, DeferredReviewCommentSource, IntakeError, JsonFileCommentStore,
    NaiveBayesClassifier, OctocrabReviewCommentSource, PersentError, PersonalAccessToken,
    RepositoryLocator, ReviewerRanking, render,
};
use rstest_bdd_macros::when;
use wiremock::MockServer;

use crate::review_sentiment_bdd_state::{API_PREFIX, RankingState, split_repository};

#[when("the reviewers of {repository} are ranked")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn rank_reviewers(ranking_state: &RankingState, repository: String) {
    let runtime = ranking_state.runtime.get().expect("runtime not initialised");
    let server_url = ranking_state
        .server
        .with_ref(MockServer::uri)
        .expect("mock server URL missing");
    let cache_dir = ranking_state
        .cache_dir
        .with_ref(|dir| Utf8PathBuf::from_path_buf(dir.path().to_path_buf()))
        .expect("cache directory missing")
        .expect("cache directory should be UTF-8");
    let (owner, repo) = split_repository(&repository);
    let token_value = ranking_state.token.get();

    let result = runtime.block_on(async {
        let locator = RepositoryLocator::with_api_base(
            &owner,
            &repo,
            &format!("{server_url}{API_PREFIX}"),
        )?;
        let source = DeferredReviewCommentSource::new(|| -> Result<_, IntakeError> {
            let token = PersonalAccessToken::new(
                token_value.as_deref().ok_or(IntakeError::MissingToken)?,
            )?;
            OctocrabReviewCommentSource::for_token(&token, &locator)
        });
        let store = JsonFileCommentStore::new(cache_dir);
        let classifier = NaiveBayesClassifier::restore()?;

        let ranked = ReviewerRanking::new(CommentFetcher::new(&source, &store), &classifier)
            .run(&locator)
            .await?;
        Ok::<_, PersentError>(render(&ranked))
    });

    match result {
        Ok(report) => {
            let _had_previous_error = ranking_state.error.take().is_some();
            ranking_state.report.set(report);
        }
        Err(error) => {
            let _had_previous_report = ranking_state.report.take().is_some();
            ranking_state.error.set(error);
        }
    }
}

#[when("the reviewers of {repository} are ranked again")]
fn rank_reviewers_again(ranking_state: &RankingState, repository: String) {
    rank_reviewers(ranking_state, repository);
}
