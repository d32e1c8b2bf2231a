//! reqwest-backed implementation of the backend ports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, LOCATION};
use reqwest::{Client, Response, redirect};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::api::dto::dashboard::{StatsResponse, UrlListResponse};
use crate::api::dto::error::ApiErrorBody;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::entities::{DashboardStats, Page, ShortenedUrl, UrlRecord};
use crate::domain::ports::{LookupResponse, RedirectLookup, TransportError, UrlApi, UrlListQuery};
use crate::error::ClientError;

/// Largest lookup body that is read. A longer body is discarded.
const MAX_LOOKUP_BODY_BYTES: usize = 64 * 1024;

/// HTTP client for the Short.ly backend.
///
/// Redirects are never followed, so a 301/302 from the lookup endpoint is
/// returned to the resolver as-is. Every request is bounded by the timeout
/// given at construction.
#[derive(Debug, Clone)]
pub struct HttpUrlApi {
    client: Client,
    base_url: Url,
}

impl HttpUrlApi {
    /// Builds a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if `base_url` is not an absolute
    /// HTTP(S) URL, [`ClientError::Network`] if the TLS backend fails to initialise.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::validation(format!("Invalid API base URL: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::validation(
                "API base URL must use http or https",
            ));
        }

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {e}")))?;

        info!("API client ready for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| format!("{} cannot be used as a base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn api_endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        self.endpoint(segments).map_err(ClientError::validation)
    }
}

/// Maps a reqwest failure that yielded no status.
fn transport_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::Request(e.to_string())
    } else {
        TransportError::Connect(e.to_string())
    }
}

/// Converts a non-success response into a [`ClientError`].
///
/// Reads the backend's `{ message, limitReached }` body when present.
async fn error_from_response(response: Response, fallback: &str) -> ClientError {
    let status = response.status().as_u16();
    let body: ApiErrorBody = response.json().await.unwrap_or_default();

    if body.limit_reached {
        return ClientError::LimitReached;
    }

    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    warn!("API request failed with {}: {}", status, message);
    ClientError::api(status, message)
}

/// `Location` as text. Raw UTF-8 is accepted; other bytes yield `None`.
fn location_header(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(LOCATION)?;
    match std::str::from_utf8(value.as_bytes()) {
        Ok(location) => Some(location.to_string()),
        Err(_) => {
            warn!("Ignoring Location header that is not valid UTF-8");
            None
        }
    }
}

/// Reads at most [`MAX_LOOKUP_BODY_BYTES`] of a lookup body.
///
/// An oversized or unreadable body is returned as empty so the status alone
/// decides the outcome. A timeout while reading is still a timeout.
async fn read_lookup_body(mut response: Response) -> Result<String, TransportError> {
    let mut body = Vec::new();

    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                if body.len() + chunk.len() > MAX_LOOKUP_BODY_BYTES {
                    warn!(
                        "Lookup body exceeds {} bytes, discarding",
                        MAX_LOOKUP_BODY_BYTES
                    );
                    return Ok(String::new());
                }
                body.extend_from_slice(&chunk);
            }
            Ok(None) => break,
            Err(e) if e.is_timeout() => return Err(TransportError::Timeout),
            Err(e) => {
                error!("Failed to read lookup body: {}", e);
                return Ok(String::new());
            }
        }
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[async_trait]
impl RedirectLookup for HttpUrlApi {
    async fn lookup(&self, code: &str) -> Result<LookupResponse, TransportError> {
        let url = self
            .endpoint(&["api", "url", code])
            .map_err(TransportError::Request)?;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let location = location_header(response.headers());
        let body = read_lookup_body(response).await?;

        debug!("Lookup for {} answered {}", code, status);

        Ok(LookupResponse {
            status,
            location,
            body,
        })
    }
}

#[async_trait]
impl UrlApi for HttpUrlApi {
    async fn shorten(
        &self,
        token: &str,
        request: &ShortenRequest,
    ) -> Result<ShortenedUrl, ClientError> {
        let url = self.api_endpoint(&["api", "url", "shorten"])?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to shorten URL").await);
        }

        let body: ShortenResponse = response.json().await?;
        match body.url {
            Some(url) if body.success => Ok(url.into()),
            _ => Err(ClientError::Decode(
                "shorten response did not report success".to_string(),
            )),
        }
    }

    async fn list_urls(
        &self,
        token: &str,
        query: &UrlListQuery,
    ) -> Result<Page<UrlRecord>, ClientError> {
        let mut url = self.api_endpoint(&["api", "dashboard", "urls"])?;
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("limit", &query.limit.to_string())
            .append_pair("search", &query.search);

        let response = self.client.get(url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to fetch URLs").await);
        }

        let body: UrlListResponse = response.json().await?;
        Ok(body.into())
    }

    async fn stats(&self, token: &str) -> Result<DashboardStats, ClientError> {
        let url = self.api_endpoint(&["api", "dashboard", "stats"])?;

        let response = self.client.get(url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to fetch statistics").await);
        }

        let body: StatsResponse = response.json().await?;
        Ok(body.stats.into())
    }

    async fn delete_url(&self, token: &str, code: &str) -> Result<(), ClientError> {
        let url = self.api_endpoint(&["api", "url", code])?;

        let response = self.client.delete(url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to delete URL").await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn api(base: &str) -> HttpUrlApi {
        HttpUrlApi::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = api("http://localhost:5000");
        assert_eq!(
            api.endpoint(&["api", "url", "abc123"]).unwrap().as_str(),
            "http://localhost:5000/api/url/abc123"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = api("https://example.com/backend/");
        assert_eq!(
            api.endpoint(&["api", "url", "abc123"]).unwrap().as_str(),
            "https://example.com/backend/api/url/abc123"
        );
    }

    #[test]
    fn test_endpoint_encodes_code() {
        let api = api("http://localhost:5000");
        assert_eq!(
            api.endpoint(&["api", "url", "a/b c"]).unwrap().as_str(),
            "http://localhost:5000/api/url/a%2Fb%20c"
        );
    }

    #[test]
    fn test_location_accepts_raw_utf8() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LOCATION,
            HeaderValue::from_bytes("https://example.com/café".as_bytes()).unwrap(),
        );
        assert_eq!(
            location_header(&headers).as_deref(),
            Some("https://example.com/café")
        );
    }

    #[test]
    fn test_location_rejects_invalid_utf8() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LOCATION,
            HeaderValue::from_bytes(b"https://example.com/\xff\xfe").unwrap(),
        );
        assert_eq!(location_header(&headers), None);
        assert_eq!(location_header(&HeaderMap::new()), None);
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(HttpUrlApi::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpUrlApi::new("ftp://example.com", Duration::from_secs(1)).is_err());
    }
}
