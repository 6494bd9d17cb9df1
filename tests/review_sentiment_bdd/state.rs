//! Scenario state for reviewer ranking BDD tests.

use persent::PersentError;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use wiremock::MockServer;

pub(crate) use crate::support::runtime::SharedRuntime;

/// GitHub API prefix served by the mock server.
pub(crate) const API_PREFIX: &str = "/api/v3";

#[derive(ScenarioState, Default)]
pub(crate) struct RankingState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) cache_dir: Slot<TempDir>,
    pub(crate) report: Slot<Vec<String>>,
    pub(crate) error: Slot<PersentError>,
}

/// Splits an `owner/repo` step argument.
pub(crate) fn split_repository(repository: &str) -> (String, String) {
    let cleaned = repository.trim_matches('"');
    let Some((owner, repo)) = cleaned.split_once('/') else {
        panic!("repository argument should be owner/repo, got {cleaned}");
    };
    (owner.to_owned(), repo.to_owned())
}
