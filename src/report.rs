//! Plain-text rendering of ranked authors.

use std::io::{self, Write};

use crate::stats::AuthorAggregate;

/// Renders one line per author: `<author>: <percent>% of <count>`.
///
/// The percentage is rounded to a whole number.
///
/// # Example
///
/// ```
/// use persent::{AuthorAggregate, render};
///
/// let ranked = vec![AuthorAggregate {
///     author: "alice".to_owned(),
///     total_comments: 8,
///     percent_positive: 62.4,
///     comments: Vec::new(),
/// }];
/// assert_eq!(render(&ranked), ["alice: 62% of 8"]);
/// ```
#[must_use]
pub fn render(ranked: &[AuthorAggregate]) -> Vec<String> {
    ranked
        .iter()
        .map(|aggregate| {
            format!(
                "{author}: {percent:.0}% of {total}",
                author = aggregate.author,
                percent = aggregate.percent_positive,
                total = aggregate.total_comments
            )
        })
        .collect()
}

/// Writes rendered lines to `writer`, one per line.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_report<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
