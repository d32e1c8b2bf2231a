//! DTOs for the link shortening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::ShortenedUrl;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("custom code regex is valid"));

/// Request to shorten a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom short code, 6-8 letters and numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, max = 8, message = "Custom code must be 6-8 characters"))]
    #[validate(regex(
        path = "*CUSTOM_CODE_REGEX",
        message = "Custom code can only contain letters and numbers"
    ))]
    pub custom_code: Option<String>,
}

/// Successful shorten response: `{ "success": true, "url": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct ShortenResponse {
    #[serde(default)]
    pub success: bool,
    pub url: Option<ShortenedUrlDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrlDto {
    pub original_url: String,
    pub short_code: Option<String>,
    pub short_url: String,
}

impl From<ShortenedUrlDto> for ShortenedUrl {
    fn from(dto: ShortenedUrlDto) -> Self {
        Self {
            original_url: dto.original_url,
            short_code: dto.short_code,
            short_url: dto.short_url,
        }
    }
}
