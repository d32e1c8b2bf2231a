//! Shortened URL entities returned by the backend.

use chrono::{DateTime, Utc};

/// A URL owned by the current user, as listed on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub original_url: String,
    pub short_code: Option<String>,
    pub short_url: String,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_navigation() {
        let page: Page<UrlRecord> = Page {
            items: vec![],
            page: 1,
            limit: 10,
            total: 25,
            pages: 3,
        };
        assert!(page.has_next());
        assert!(!page.has_previous());

        let last = Page { page: 3, ..page };
        assert!(!last.has_next());
        assert!(last.has_previous());
    }
}
