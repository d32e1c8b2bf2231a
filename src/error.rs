//! Error type shared by the client services.
//!
//! The resolver never surfaces these: its failures are folded into
//! [`crate::domain::entities::ResolutionResult`]. Shortening and dashboard calls
//! return [`ClientError`] so callers can show a message or react to the kind.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please login to shorten URLs")]
    Unauthenticated,

    /// The account is at its tier limit, checked before any request.
    #[error("You have reached your URL limit. Please upgrade to premium.")]
    TierLimit { limit: u64 },

    /// The backend refused the request with `limitReached`.
    #[error("URL limit reached. Please upgrade to premium.")]
    LimitReached,

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Self::Decode(e.to_string());
        }
        if let Some(status) = e.status() {
            return Self::api(status.as_u16(), e.to_string());
        }
        Self::Network(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reason = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {reason}")
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(message)
    }
}
