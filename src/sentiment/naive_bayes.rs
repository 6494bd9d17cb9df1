//! Binary multinomial Naive Bayes sentiment classifier.
//!
//! The model is a snapshot of per-class document counts and word
//! frequencies. Scoring sums Laplace-smoothed log-likelihoods of the words the
//! snapshot knows about; words outside its vocabulary carry no evidence.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::{ClassifierError, SentimentClassifier};

/// Pretrained snapshot bundled with the binary.
const BUNDLED_SNAPSHOT: &str = include_str!("model/snapshot.json");

/// Score assigned to text classified as positive.
pub const POSITIVE: u8 = 1;

/// Score assigned to text classified as negative.
pub const NEGATIVE: u8 = 0;

#[derive(Debug, Deserialize)]
struct Snapshot {
    negative: ClassSnapshot,
    positive: ClassSnapshot,
}

#[derive(Debug, Deserialize)]
struct ClassSnapshot {
    documents: u64,
    words: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
struct ClassModel {
    log_prior: f64,
    word_counts: HashMap<String, u64>,
    denominator: f64,
}

impl ClassModel {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "log-likelihoods are floating point by nature"
    )]
    fn log_likelihood<'t>(&self, tokens: impl Iterator<Item = &'t str>) -> f64 {
        tokens.fold(self.log_prior, |total, token| {
            let count = self.word_counts.get(token).copied().unwrap_or(0);
            total + ((count as f64 + 1.0) / self.denominator).ln()
        })
    }
}

/// Naive Bayes classifier scoring text as [`POSITIVE`] or [`NEGATIVE`].
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    negative: ClassModel,
    positive: ClassModel,
    vocabulary: HashSet<String>,
}

impl NaiveBayesClassifier {
    /// Restores the pretrained snapshot bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::ModelInit`] if the bundled snapshot is
    /// malformed.
    pub fn restore() -> Result<Self, ClassifierError> {
        Self::from_json(BUNDLED_SNAPSHOT)
    }

    /// Restores a classifier from a JSON snapshot of the form
    /// `{"negative": {"documents": n, "words": {..}}, "positive": {..}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::ModelInit`] when the JSON does not match the
    /// snapshot shape, when either class has no documents, or when the
    /// vocabulary is empty.
    pub fn from_json(snapshot: &str) -> Result<Self, ClassifierError> {
        let parsed: Snapshot =
            serde_json::from_str(snapshot).map_err(|error| ClassifierError::ModelInit {
                message: format!("sentiment snapshot is malformed: {error}"),
            })?;
        Self::from_snapshot(parsed)
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "priors and smoothing denominators are floating point"
    )]
    fn from_snapshot(snapshot: Snapshot) -> Result<Self, ClassifierError> {
        let Snapshot { negative, positive } = snapshot;

        if negative.documents == 0 || positive.documents == 0 {
            return Err(ClassifierError::ModelInit {
                message: "sentiment snapshot needs documents for both classes".to_owned(),
            });
        }

        let vocabulary: HashSet<String> = negative
            .words
            .keys()
            .chain(positive.words.keys())
            .cloned()
            .collect();
        if vocabulary.is_empty() {
            return Err(ClassifierError::ModelInit {
                message: "sentiment snapshot has an empty vocabulary".to_owned(),
            });
        }

        let total_documents = (negative.documents + positive.documents) as f64;
        let vocabulary_size = vocabulary.len() as f64;
        let build = |class: ClassSnapshot| {
            let total_words: u64 = class.words.values().sum();
            ClassModel {
                log_prior: (class.documents as f64 / total_documents).ln(),
                word_counts: class.words,
                denominator: total_words as f64 + vocabulary_size,
            }
        };

        Ok(Self {
            negative: build(negative),
            positive: build(positive),
            vocabulary,
        })
    }

    fn known_tokens(&self, text: &str) -> Vec<String> {
        text.split(|character: char| !(character.is_alphanumeric() || character == '\''))
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .filter(|token| self.vocabulary.contains(token))
            .collect()
    }
}

impl SentimentClassifier for NaiveBayesClassifier {
    fn score_max(&self) -> u8 {
        POSITIVE
    }

    fn score(&self, body: &str) -> Result<u8, ClassifierError> {
        let tokens = self.known_tokens(body);
        let positive = self
            .positive
            .log_likelihood(tokens.iter().map(String::as_str));
        let negative = self
            .negative
            .log_likelihood(tokens.iter().map(String::as_str));

        Ok(if positive > negative {
            POSITIVE
        } else {
            NEGATIVE
        })
    }
}
