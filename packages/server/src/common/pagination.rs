//! Page-number pagination for the public list pages.
//!
//! ```rust,ignore
//! let request = PageRequest::from_query(params.page.as_deref())?;
//! let total = Event::count_public(search, pool).await?;
//! let window = Paginator::new(total, LIST_PAGE_SIZE).page(request)?;
//! let events = Event::find_public_page(search, &window, pool).await?;
//! ```

use serde::Serialize;
use thiserror::Error;

/// Items per page on every public list.
pub const LIST_PAGE_SIZE: i64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid page")]
pub struct InvalidPage;

/// The `?page=` value as the visitor sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl PageRequest {
    /// Missing means page 1, `last` means the final page, anything else
    /// must be an integer.
    pub fn from_query(raw: Option<&str>) -> Result<Self, InvalidPage> {
        match raw.map(str::trim) {
            None | Some("") => Ok(PageRequest::Number(1)),
            Some("last") => Ok(PageRequest::Last),
            Some(value) => value
                .parse::<i64>()
                .map(PageRequest::Number)
                .map_err(|_| InvalidPage),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    total: i64,
    per_page: i64,
}

impl Paginator {
    pub fn new(total: i64, per_page: i64) -> Self {
        Self {
            total: total.max(0),
            per_page: per_page.max(1),
        }
    }

    /// An empty list still has one (empty) page.
    pub fn num_pages(&self) -> i64 {
        if self.total == 0 {
            1
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    pub fn page(&self, request: PageRequest) -> Result<PageWindow, InvalidPage> {
        let num_pages = self.num_pages();
        let number = match request {
            PageRequest::Last => num_pages,
            PageRequest::Number(n) => n,
        };

        if number < 1 || number > num_pages {
            return Err(InvalidPage);
        }

        Ok(PageWindow {
            number,
            num_pages,
            total: self.total,
            offset: (number - 1) * self.per_page,
            limit: self.per_page,
        })
    }
}

/// One resolved page: what to fetch and how to render the page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub number: i64,
    pub num_pages: i64,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_other_pages(&self) -> bool {
        self.num_pages > 1
    }

    pub fn previous_number(&self) -> Option<i64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_number(&self) -> Option<i64> {
        self.has_next().then(|| self.number + 1)
    }
}
