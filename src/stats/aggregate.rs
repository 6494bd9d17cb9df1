//! Per-author rollup of scored comments.

use std::collections::HashMap;

use crate::sentiment::ScoredComment;

/// Comment count and average sentiment for one author.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorAggregate {
    /// Login of the author; unique across an aggregate set.
    pub author: String,
    /// Number of comments attributed to the author.
    pub total_comments: usize,
    /// Mean score as a percentage of the classifier's maximum, in `0..=100`.
    pub percent_positive: f64,
    /// Every scored comment by the author.
    pub comments: Vec<ScoredComment>,
}

impl AuthorAggregate {
    /// Builds an aggregate from an author's comments.
    ///
    /// `score_max` is the classifier's declared maximum score. An empty
    /// comment list, or a `score_max` of zero, yields `0.0`.
    #[must_use]
    pub fn from_comments(author: &str, comments: Vec<ScoredComment>, score_max: u8) -> Self {
        let percent_positive = percent_positive(&comments, score_max);
        Self {
            author: author.to_owned(),
            total_comments: comments.len(),
            percent_positive,
            comments,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentages are reported as floating point"
)]
fn percent_positive(comments: &[ScoredComment], score_max: u8) -> f64 {
    if comments.is_empty() || score_max == 0 {
        return 0.0;
    }

    let score_sum: u64 = comments.iter().map(|comment| u64::from(comment.score)).sum();
    let attainable = comments.len() as f64 * f64::from(score_max);
    100.0 * score_sum as f64 / attainable
}

/// Groups scored comments by author (exact, case-sensitive match).
///
/// Authors appear in the order of their first comment, so repeated runs over
/// the same input produce the same sequence. Callers wanting a ranking should
/// pass the result through [`top_n`](super::top_n).
#[must_use]
pub fn aggregate(scored: Vec<ScoredComment>, score_max: u8) -> Vec<AuthorAggregate> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<ScoredComment>)> = Vec::new();

    for comment in scored {
        if let Some(group) = positions
            .get(&comment.author)
            .and_then(|&position| groups.get_mut(position))
        {
            group.1.push(comment);
        } else {
            positions.insert(comment.author.clone(), groups.len());
            groups.push((comment.author.clone(), vec![comment]));
        }
    }

    groups
        .into_iter()
        .map(|(author, comments)| AuthorAggregate::from_comments(&author, comments, score_max))
        .collect()
}
