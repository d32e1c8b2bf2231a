//! Aggregated dashboard statistics.

/// A frequently clicked URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopUrl {
    pub short_code: Option<String>,
    pub original_url: Option<String>,
    pub clicks: u64,
}

/// Click count for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: String,
    pub clicks: u64,
}

/// Account-wide usage figures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_urls: u64,
    pub total_clicks: u64,
    pub top_urls: Vec<TopUrl>,
    pub recent_clicks: Vec<DailyClicks>,
}

impl DashboardStats {
    /// Average clicks per URL, rounded half away from zero. Zero when there are no URLs.
    pub fn average_clicks(&self) -> u64 {
        if self.total_urls == 0 {
            return 0;
        }
        (self.total_clicks + self.total_urls / 2) / self.total_urls
    }

    /// Click count of the most clicked URL, zero if none.
    pub fn top_clicks(&self) -> u64 {
        self.top_urls.first().map(|u| u.clicks).unwrap_or(0)
    }
}
