//! Dashboard data: URL listing, statistics and deletion.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{DashboardStats, Page, UrlRecord};
use crate::domain::ports::{SessionProvider, UrlApi, UrlListQuery};
use crate::error::ClientError;

/// Maximum page size accepted by the listing endpoint.
const MAX_PAGE_SIZE: u32 = 100;

/// Authenticated access to the current user's URLs.
pub struct DashboardService<A: UrlApi, S: SessionProvider> {
    api: Arc<A>,
    session: Arc<S>,
}

impl<A: UrlApi, S: SessionProvider> DashboardService<A, S> {
    pub fn new(api: Arc<A>, session: Arc<S>) -> Self {
        Self { api, session }
    }

    /// Lists one page of URLs, optionally filtered by `search`.
    ///
    /// `page` is clamped to at least 1 and `limit` to `1..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthenticated`] without a session, or the
    /// backend error otherwise.
    pub async fn list_urls(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<Page<UrlRecord>, ClientError> {
        let token = self.token()?;
        let query = UrlListQuery {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            search: search.trim().to_string(),
        };

        self.api.list_urls(&token, &query).await
    }

    /// Fetches account statistics.
    ///
    /// # Errors
    ///
    /// See [`Self::list_urls`].
    pub async fn stats(&self) -> Result<DashboardStats, ClientError> {
        let token = self.token()?;
        self.api.stats(&token).await
    }

    /// Deletes the URL behind `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an empty code, plus the cases
    /// of [`Self::list_urls`].
    pub async fn delete_url(&self, code: &str) -> Result<(), ClientError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ClientError::validation("Short code must not be empty"));
        }

        let token = self.token()?;
        self.api.delete_url(&token, code).await?;
        info!("Deleted short URL {}", code);

        Ok(())
    }

    fn token(&self) -> Result<String, ClientError> {
        self.session
            .access_token()
            .ok_or(ClientError::Unauthenticated)
    }
}
