//! URL shortening service.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::{FREE_TIER_URL_LIMIT, ShortenedUrl};
use crate::domain::ports::{SessionProvider, UrlApi};
use crate::error::ClientError;
use crate::utils::url_normalizer::normalize_url;

/// Creates short URLs on behalf of the signed-in user.
///
/// Local checks run before any request: a session must exist, a free-tier
/// account must be under its URL limit, and the input must validate.
pub struct ShortenerService<A: UrlApi, S: SessionProvider> {
    api: Arc<A>,
    session: Arc<S>,
}

impl<A: UrlApi, S: SessionProvider> ShortenerService<A, S> {
    pub fn new(api: Arc<A>, session: Arc<S>) -> Self {
        Self { api, session }
    }

    /// Shortens `original_url`, optionally under `custom_code`.
    ///
    /// An empty `custom_code` is treated as absent.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthenticated`] if there is no session
    /// - [`ClientError::TierLimit`] if the session's free-tier limit is reached
    /// - [`ClientError::LimitReached`] if the backend reports the limit
    /// - [`ClientError::Validation`] for a bad URL or custom code
    /// - [`ClientError::Api`] / [`ClientError::Network`] for backend failures
    pub async fn shorten(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortenedUrl, ClientError> {
        let (Some(user), Some(token)) = (self.session.current_user(), self.session.access_token())
        else {
            return Err(ClientError::Unauthenticated);
        };

        if user.has_reached_limit() {
            warn!("Free tier limit reached ({} URLs)", user.url_count);
            return Err(ClientError::TierLimit {
                limit: FREE_TIER_URL_LIMIT,
            });
        }

        let original_url =
            normalize_url(original_url).map_err(|e| ClientError::validation(e.to_string()))?;

        let request = ShortenRequest {
            original_url,
            custom_code: custom_code
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };
        request.validate()?;

        let shortened = self.api.shorten(&token, &request).await?;
        info!("Shortened {} to {}", shortened.original_url, shortened.short_url);

        Ok(shortened)
    }
}
