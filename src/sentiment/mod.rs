//! Sentiment scoring of review comment bodies.
//!
//! Classifiers are explicit collaborators: the caller restores one once per
//! run and lends it to [`score_comments`]. Each classifier declares the upper
//! bound of its scores through [`SentimentClassifier::score_max`], because the
//! positive percentage computed downstream is relative to that bound.

mod naive_bayes;

use thiserror::Error;

pub use naive_bayes::{NEGATIVE, NaiveBayesClassifier, POSITIVE};

use crate::github::models::RawComment;

/// Errors raised by a sentiment classifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifierError {
    /// The model could not be restored.
    #[error("failed to initialise sentiment model: {message}")]
    ModelInit {
        /// Details about the initialisation failure.
        message: String,
    },

    /// A comment body could not be scored.
    #[error("failed to score comment {comment_id}: {message}")]
    Scoring {
        /// Identifier of the comment being scored.
        comment_id: u64,
        /// Details about the scoring failure.
        message: String,
    },
}

/// Assigns a sentiment polarity score to text.
pub trait SentimentClassifier {
    /// Largest score this classifier can return.
    fn score_max(&self) -> u8;

    /// Scores `body`; the result lies in `0..=score_max()`.
    ///
    /// Must accept empty text and be deterministic for a given model.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Scoring`] when the text cannot be scored.
    fn score(&self, body: &str) -> Result<u8, ClassifierError>;
}

/// A review comment together with its sentiment score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredComment {
    /// Comment identifier.
    pub id: u64,
    /// Login of the commenting author.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Sentiment score in `0..=score_max` of the classifier that produced it.
    pub score: u8,
}

/// Scores each comment exactly once, preserving input order.
///
/// # Errors
///
/// Returns the first [`ClassifierError`] raised; comments after it are not
/// scored.
pub fn score_comments<C>(
    classifier: &C,
    comments: &[RawComment],
) -> Result<Vec<ScoredComment>, ClassifierError>
where
    C: SentimentClassifier + ?Sized,
{
    comments
        .iter()
        .map(|comment| {
            let score = classifier.score(comment.body())?;
            Ok(ScoredComment {
                id: comment.id(),
                author: comment.author().to_owned(),
                body: comment.body().to_owned(),
                score,
            })
        })
        .collect()
}
