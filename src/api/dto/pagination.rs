//! Limit/offset pagination for list endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::PageWindow;
use crate::error::AppError;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings. Pagination is
/// active only when `limit` is present.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct LimitOffsetParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<i64>,
}

impl LimitOffsetParams {
    /// Converts the parameters into a database window.
    ///
    /// Returns `Ok(None)` when no `limit` was given.
    ///
    /// # Validation
    ///
    /// - `limit` must be > 0
    /// - `offset` must be >= 0 (defaults to 0)
    pub fn window(&self) -> Result<Option<PageWindow>, AppError> {
        let Some(limit) = self.limit else {
            return Ok(None);
        };

        if limit <= 0 {
            return Err(AppError::field("limit", "Ensure this value is greater than 0."));
        }

        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(AppError::field(
                "offset",
                "Ensure this value is greater than or equal to 0.",
            ));
        }

        Ok(Some(PageWindow { offset, limit }))
    }
}

/// One page of results with navigation links.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Builds a page, deriving `next`/`previous` from `url` (the absolute
    /// collection URL) and the window.
    pub fn new(results: Vec<T>, count: i64, window: PageWindow, url: &str) -> Self {
        let PageWindow { offset, limit } = window;

        // An end past i64::MAX is past every count.
        let next = offset
            .checked_add(limit)
            .filter(|&end| end < count)
            .map(|end| format!("{url}?limit={limit}&offset={end}"));

        let previous = (offset > 0).then(|| {
            if offset - limit <= 0 {
                format!("{url}?limit={limit}")
            } else {
                format!("{url}?limit={limit}&offset={}", offset - limit)
            }
        });

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}

/// List body: a page when pagination was requested, a plain array otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Page(Page<T>),
    All(Vec<T>),
}
