//! Persent ranks a repository's pull request reviewers by how positive
//! their review comments are.
//!
//! The library fetches every review comment through Octocrab (or a cached
//! copy on disk), scores each body with a naive Bayes sentiment model, and
//! rolls the scores up per author so the busiest commenters can be reported.

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod stats;

pub use cache::{CacheError, CacheKey, CommentStore, JsonFileCommentStore};
pub use config::PersentConfig;
pub use error::PersentError;
pub use github::{
    CommentFetcher, DeferredReviewCommentSource, IntakeError, OctocrabReviewCommentSource,
    PersonalAccessToken, RawComment, RepositoryLocator, ReviewCommentSource,
};
pub use pipeline::ReviewerRanking;
pub use report::{render, write_report};
pub use sentiment::{NaiveBayesClassifier, ScoredComment, SentimentClassifier};
pub use stats::{AuthorAggregate, TOP_COMMENTERS};
