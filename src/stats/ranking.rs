//! Ranking of authors by comment volume.

use super::aggregate::AuthorAggregate;

/// Number of authors included in the report.
pub const TOP_COMMENTERS: usize = 10;

/// Returns the `n` authors with the most comments, most prolific first.
///
/// The sort is stable, so authors with equal counts keep their input order.
/// Inputs shorter than `n` are returned whole, sorted.
#[must_use]
pub fn top_n(mut aggregates: Vec<AuthorAggregate>, n: usize) -> Vec<AuthorAggregate> {
    aggregates.sort_by(|left, right| right.total_comments.cmp(&left.total_comments));
    aggregates.truncate(n);
    aggregates
}
