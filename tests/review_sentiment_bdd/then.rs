//! Then steps for reviewer ranking behavioural tests.

use camino::Utf8PathBuf;
use persent::{CacheKey, CommentStore, IntakeError, JsonFileCommentStore, PersentError};
use rstest_bdd_macros::then;

use crate::review_sentiment_bdd_state::{RankingState, split_repository};

fn report(ranking_state: &RankingState) -> Vec<String> {
    let Some(report) = ranking_state.report.with_ref(Clone::clone) else {
        let error = ranking_state.error.with_ref(Clone::clone);
        panic!("report missing; last error: {error:?}");
    };
    report
}

#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn cache_store(ranking_state: &RankingState) -> JsonFileCommentStore {
    let directory = ranking_state
        .cache_dir
        .with_ref(|dir| Utf8PathBuf::from_path_buf(dir.path().to_path_buf()))
        .expect("cache directory missing")
        .expect("cache directory should be UTF-8");
    JsonFileCommentStore::new(directory)
}

#[then("report line {index:u64} is {expected}")]
fn assert_report_line(ranking_state: &RankingState, index: u64, expected: String) {
    let lines = report(ranking_state);
    let position = usize::try_from(index)
        .ok()
        .and_then(|value| value.checked_sub(1))
        .unwrap_or_else(|| panic!("report lines are numbered from 1, got {index}"));

    assert_eq!(
        lines.get(position).map(String::as_str),
        Some(expected.trim_matches('"')),
        "unexpected report {lines:?}"
    );
}

#[then("the report has {count:u64} lines")]
fn assert_report_length(ranking_state: &RankingState, count: u64) {
    let lines = report(ranking_state);

    assert_eq!(
        u64::try_from(lines.len()).ok(),
        Some(count),
        "unexpected report {lines:?}"
    );
}

#[then("the cache holds {count:u64} comments for {repository}")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn assert_cached_comments(ranking_state: &RankingState, count: u64, repository: String) {
    let (owner, repo) = split_repository(&repository);
    let cached = cache_store(ranking_state)
        .load(&CacheKey::new(&owner, &repo))
        .expect("cache file should load");

    assert_eq!(u64::try_from(cached.len()).ok(), Some(count));
}

#[then("no cache file exists for {repository}")]
fn assert_no_cache_file(ranking_state: &RankingState, repository: String) {
    let (owner, repo) = split_repository(&repository);
    let path = cache_store(ranking_state).path_for(&CacheKey::new(&owner, &repo));

    assert!(!path.exists(), "cache file {path} should not exist");
}

#[then("the run fails with an authentication error")]
fn assert_authentication_error(ranking_state: &RankingState) {
    let error = ranking_state.error.with_ref(Clone::clone);

    assert!(
        matches!(
            error,
            Some(PersentError::RemoteFetch(IntakeError::Authentication { .. }))
        ),
        "expected authentication error, got {error:?}"
    );
    assert!(
        ranking_state.report.with_ref(|_| ()).is_none(),
        "no report should be produced on failure"
    );
}

#[then("the GitHub API mocks are satisfied")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn verify_mocks(ranking_state: &RankingState) {
    let runtime = ranking_state.runtime.get().expect("runtime not initialised");
    ranking_state
        .server
        .with_ref(|server| runtime.block_on(server.verify()))
        .expect("mock server not initialised");
}

#[then("the GitHub API received no requests")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn assert_no_requests(ranking_state: &RankingState) {
    let runtime = ranking_state.runtime.get().expect("runtime not initialised");
    let requests = ranking_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .expect("mock server not initialised")
        .expect("request recording is not enabled");

    assert!(requests.is_empty(), "unexpected requests: {requests:?}");
}

#[then("the run fails because no token is configured")]
fn assert_missing_token(ranking_state: &RankingState) {
    let error = ranking_state.error.with_ref(Clone::clone);

    assert_eq!(
        error,
        Some(PersentError::RemoteFetch(IntakeError::MissingToken))
    );
}
