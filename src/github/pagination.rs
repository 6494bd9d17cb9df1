//! Page requests and page results for the GitHub review comment listing.
//!
//! GitHub paginates list endpoints through `page`/`per_page` query parameters
//! and advertises the following page in the `Link` response header. These
//! types carry that state between the gateway and the fetch loop.

use http::Uri;

use super::error::IntakeError;
use super::models::RawComment;

/// Page size requested for review comments; the maximum GitHub allows.
pub const REVIEW_COMMENTS_PER_PAGE: u8 = 100;

const MAX_PER_PAGE: u8 = 100;

/// A validated request for one page of results.
///
/// # Example
///
/// ```
/// use persent::github::pagination::PageRequest;
///
/// let request = PageRequest::new(2, 100).expect("valid page request");
/// assert_eq!(request.page(), 2);
/// assert_eq!(request.per_page(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u8,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPagination`] when `page` is zero or
    /// `per_page` is outside `1..=100`.
    pub fn new(page: u32, per_page: u8) -> Result<Self, IntakeError> {
        if page == 0 {
            return Err(IntakeError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }

        if per_page == 0 {
            return Err(IntakeError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if per_page > MAX_PER_PAGE {
            return Err(IntakeError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PER_PAGE}"),
            });
        }

        Ok(Self { page, per_page })
    }

    /// The first page of review comments at the fixed page size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 1,
            per_page: REVIEW_COMMENTS_PER_PAGE,
        }
    }

    /// Requests `page` while keeping this request's page size.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPagination`] when `page` is zero.
    pub fn with_page(self, page: u32) -> Result<Self, IntakeError> {
        Self::new(page, self.per_page)
    }

    /// Returns the requested page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }
}

/// One page of review comments and GitHub's view of what follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentPage {
    /// Comments on this page, in API order.
    pub comments: Vec<RawComment>,
    /// Page number advertised by the `rel="next"` link, if any.
    pub next_page: Option<u32>,
    /// Page number advertised by the `rel="last"` link, if any.
    pub last_page: Option<u32>,
}

/// Extracts the `page` query parameter from a pagination link.
pub(crate) fn page_number(uri: &Uri) -> Option<u32> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
