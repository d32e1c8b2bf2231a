//! DTOs for the dashboard endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::{DailyClicks, DashboardStats, Page, TopUrl, UrlRecord};

/// `GET /api/dashboard/urls` response.
#[derive(Debug, Deserialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlItemDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlItemDto {
    #[serde(alias = "_id")]
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl From<UrlItemDto> for UrlRecord {
    fn from(dto: UrlItemDto) -> Self {
        Self {
            id: dto.id,
            original_url: dto.original_url,
            short_code: dto.short_code,
            short_url: dto.short_url,
            clicks: dto.clicks,
            created_at: dto.created_at,
        }
    }
}

impl From<UrlListResponse> for Page<UrlRecord> {
    fn from(response: UrlListResponse) -> Self {
        Self {
            items: response.urls.into_iter().map(Into::into).collect(),
            page: response.pagination.page,
            limit: response.pagination.limit,
            total: response.pagination.total,
            pages: response.pagination.pages,
        }
    }
}

/// `GET /api/dashboard/stats` response.
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub stats: StatsDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    #[serde(default)]
    pub total_urls: u64,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub top_urls: Vec<TopUrlDto>,
    #[serde(default)]
    pub recent_clicks: Vec<DailyClicksDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUrlDto {
    pub short_code: Option<String>,
    pub original_url: Option<String>,
    #[serde(default)]
    pub clicks: u64,
}

/// One point of the recent-clicks series; the backend keys it by `_id` (the day).
#[derive(Debug, Deserialize)]
pub struct DailyClicksDto {
    #[serde(rename = "_id")]
    pub date: String,
    #[serde(default)]
    pub clicks: u64,
}

impl From<StatsDto> for DashboardStats {
    fn from(dto: StatsDto) -> Self {
        Self {
            total_urls: dto.total_urls,
            total_clicks: dto.total_clicks,
            top_urls: dto
                .top_urls
                .into_iter()
                .map(|u| TopUrl {
                    short_code: u.short_code,
                    original_url: u.original_url,
                    clicks: u.clicks,
                })
                .collect(),
            recent_clicks: dto
                .recent_clicks
                .into_iter()
                .map(|d| DailyClicks {
                    date: d.date,
                    clicks: d.clicks,
                })
                .collect(),
        }
    }
}
