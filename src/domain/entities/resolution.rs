//! Resolution outcome and lifecycle of a short-code lookup.

use serde::Serialize;

pub const MSG_NOT_FOUND: &str = "This shortened URL does not exist or has been deleted.";
pub const MSG_EXPIRED: &str = "This link has expired.";
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please try again later.";
pub const MSG_NETWORK_FAILURE: &str = "Network error. Please check your internet connection.";
pub const MSG_REDIRECT_FAILED: &str = "Failed to redirect. The link may be invalid or broken.";

/// Terminal outcome of resolving one short code.
///
/// Exactly one variant is produced per query. Only [`ResolutionResult::Redirect`]
/// carries a destination; every other variant is an error kind with a fixed
/// user-facing message (see [`ResolutionResult::message`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// A live mapping was found.
    Redirect { destination_url: String },
    /// Mapping absent or deleted (HTTP 404).
    NotFound,
    /// Mapping past its validity window (HTTP 410).
    Expired,
    /// Caller exceeded the request quota (HTTP 429).
    RateLimited,
    /// No response was received: connect failure, DNS failure or timeout.
    NetworkFailure,
    /// A response arrived but carried no usable destination.
    MalformedResponse,
    /// Anything else. `detail` is a short diagnostic, never an error chain.
    Unknown { detail: String },
}

impl ResolutionResult {
    pub fn redirect(destination_url: impl Into<String>) -> Self {
        Self::Redirect {
            destination_url: destination_url.into(),
        }
    }

    pub fn unknown(detail: impl Into<String>) -> Self {
        Self::Unknown {
            detail: detail.into(),
        }
    }

    /// Returns the destination for a redirect, `None` for error kinds.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Self::Redirect { destination_url } => Some(destination_url),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Redirect { .. })
    }

    /// User-visible message for error kinds.
    ///
    /// `MalformedResponse` and `Unknown` share the generic text.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Redirect { .. } => None,
            Self::NotFound => Some(MSG_NOT_FOUND),
            Self::Expired => Some(MSG_EXPIRED),
            Self::RateLimited => Some(MSG_RATE_LIMITED),
            Self::NetworkFailure => Some(MSG_NETWORK_FAILURE),
            Self::MalformedResponse | Self::Unknown { .. } => Some(MSG_REDIRECT_FAILED),
        }
    }

    /// Stable lowercase label, used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Redirect { .. } => "redirect",
            Self::NotFound => "not_found",
            Self::Expired => "expired",
            Self::RateLimited => "rate_limited",
            Self::NetworkFailure => "network_failure",
            Self::MalformedResponse => "malformed_response",
            Self::Unknown { .. } => "unknown",
        }
    }
}

/// Per-query lifecycle: `Pending` until the lookup completes, then `Settled`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolutionState {
    #[default]
    Pending,
    Settled(ResolutionResult),
}

impl ResolutionState {
    /// Moves `Pending` to `Settled(result)`.
    ///
    /// Returns `false` and leaves the state untouched if it was already settled.
    pub fn settle(&mut self, result: ResolutionResult) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Settled(result);
                true
            }
            Self::Settled(_) => false,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled(_))
    }

    pub fn result(&self) -> Option<&ResolutionResult> {
        match self {
            Self::Pending => None,
            Self::Settled(result) => Some(result),
        }
    }

    /// Coarse state exposed to the presentation layer.
    pub fn view_state(&self) -> ViewState {
        match self {
            Self::Pending => ViewState::Pending,
            Self::Settled(ResolutionResult::Redirect { .. }) => ViewState::Redirecting,
            Self::Settled(_) => ViewState::Error,
        }
    }
}

/// What a redirect screen should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Pending,
    Redirecting,
    Error,
}

/// Snapshot handed to whatever renders the redirect screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectViewModel {
    pub state: ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub short_code: String,
}
