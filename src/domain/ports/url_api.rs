//! Backend API ports.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::{DashboardStats, Page, ShortenedUrl, UrlRecord};
use crate::error::ClientError;

/// Raw response to a short-code lookup, before classification.
///
/// Produced for every status code the server returns; only failures to obtain
/// a status at all are reported as [`TransportError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupResponse {
    pub status: u16,
    /// `Location` header, if present and valid UTF-8.
    pub location: Option<String>,
    pub body: String,
}

/// Failure to get any response from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(String),
}

/// Looks up the destination of a short code.
///
/// Implementations must not follow redirects: a 301/302 is returned as a
/// [`LookupResponse`] so the caller can read its `Location`.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpUrlApi`] - reqwest-backed client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectLookup: Send + Sync {
    /// Issues `GET /api/url/{code}`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP status could be obtained.
    async fn lookup(&self, code: &str) -> Result<LookupResponse, TransportError>;
}

/// Filters for the dashboard URL listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl Default for UrlListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: String::new(),
        }
    }
}

/// Authenticated URL management endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlApi: Send + Sync {
    /// `POST /api/url/shorten`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::LimitReached`] if the backend flags the account
    /// limit, [`ClientError::Api`] with the backend's message otherwise.
    async fn shorten(&self, token: &str, request: &ShortenRequest)
    -> Result<ShortenedUrl, ClientError>;

    /// `GET /api/dashboard/urls`.
    async fn list_urls(
        &self,
        token: &str,
        query: &UrlListQuery,
    ) -> Result<Page<UrlRecord>, ClientError>;

    /// `GET /api/dashboard/stats`.
    async fn stats(&self, token: &str) -> Result<DashboardStats, ClientError>;

    /// `DELETE /api/url/{code}`.
    async fn delete_url(&self, token: &str, code: &str) -> Result<(), ClientError>;
}
