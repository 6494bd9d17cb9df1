//! Per-author statistics over scored review comments.
//!
//! [`aggregate`] rolls comments up by author and [`top_n`] ranks the result
//! by comment volume.

mod aggregate;
mod ranking;

pub use aggregate::{AuthorAggregate, aggregate};
pub use ranking::{TOP_COMMENTERS, top_n};
