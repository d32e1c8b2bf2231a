//! URL checks applied before a URL is sent for shortening.
//!
//! Rejects anything that is not an absolute HTTP(S) URL and normalises the
//! host so the backend sees a consistent form.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. Only HTTP and HTTPS are allowed
/// 3. Hostname is lowercased and default ports are dropped (done by `url`)
/// 4. Path, query and fragment are preserved
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes such
/// as `javascript:` or `data:`.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(url.to_string())
}
