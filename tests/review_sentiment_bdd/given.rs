//! Given steps for reviewer ranking behavioural tests.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use rstest_bdd_macros::given;

use crate::review_sentiment_bdd_state::{API_PREFIX, RankingState, split_repository};
use crate::support::create_temp_dir;
use crate::support::runtime::ensure_runtime_and_server;

fn review_comments() -> Value {
    json!([
        {"id": 1, "body": "Great work, thanks! LGTM", "user": {"login": "alice"}},
        {"id": 2, "body": "This is wrong and breaks the build", "user": {"login": "bob"}},
        {"id": 3, "body": "AWESOME improvement", "user": {"login": "bob"}},
        {"id": 4, "body": "Nice and clean, looks good to me", "user": {"login": "alice"}},
        {"id": 5, "body": "nit: typo", "user": {"login": "bob"}}
    ])
}

#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn mount_comments(ranking_state: &RankingState, repository: &str, expected_calls: Option<u64>) {
    let runtime = ensure_runtime_and_server(&ranking_state.runtime, &ranking_state.server)
        .expect("failed to create Tokio runtime");
    let (owner, repo) = split_repository(repository);

    let mut mock = Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/repos/{owner}/{repo}/pulls/comments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(review_comments()));
    if let Some(calls) = expected_calls {
        mock = mock.expect(calls);
    }

    ranking_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .expect("mock server not initialised");
}

#[given("a mock GitHub API server with review comments for {repository}")]
fn seed_comments(ranking_state: &RankingState, repository: String) {
    mount_comments(ranking_state, &repository, None);
}

#[given("a mock GitHub API server that serves review comments for {repository} once")]
fn seed_comments_once(ranking_state: &RankingState, repository: String) {
    mount_comments(ranking_state, &repository, Some(1));
}

#[given("a mock GitHub API server that rejects the token for {repository}")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn seed_rejecting_server(ranking_state: &RankingState, repository: String) {
    let runtime = ensure_runtime_and_server(&ranking_state.runtime, &ranking_state.server)
        .expect("failed to create Tokio runtime");
    let (owner, repo) = split_repository(&repository);

    let mock = Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/repos/{owner}/{repo}/pulls/comments")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
        );

    ranking_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .expect("mock server not initialised");
}

#[given("an empty cache directory")]
fn empty_cache_directory(ranking_state: &RankingState) {
    ranking_state.cache_dir.set(create_temp_dir());
}

#[given("a personal access token {token}")]
fn remember_token(ranking_state: &RankingState, token: String) {
    ranking_state.token.set(token);
}

#[given("a cache seeded with review comments for {repository}")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn seed_cache(ranking_state: &RankingState, repository: String) {
    let (owner, repo) = split_repository(&repository);
    let cache_dir = create_temp_dir();
    let contents =
        serde_json::to_string(&review_comments()).expect("comments should serialise");
    std::fs::write(cache_dir.path().join(format!("{owner}.{repo}.json")), contents)
        .expect("cache file should be written");
    ranking_state.cache_dir.set(cache_dir);
}

#[given("no personal access token")]
fn forget_token(ranking_state: &RankingState) {
    let _had_token = ranking_state.token.take().is_some();
}

#[given("a mock GitHub API server that expects no requests")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn seed_silent_server(ranking_state: &RankingState) {
    ensure_runtime_and_server(&ranking_state.runtime, &ranking_state.server)
        .expect("failed to create Tokio runtime");
}
