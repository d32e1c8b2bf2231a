//! # Short.ly client
//!
//! Client for the Short.ly URL shortener backend. All business logic (URL
//! storage, click tracking, rate limiting) lives in the backend; this crate
//! resolves short codes, creates short URLs and reads dashboard data over its
//! REST API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the ports to external collaborators
//! - **Application Layer** ([`application`]) - Resolver, redirect view, shortener and dashboard services
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client, navigators, sessions
//! - **API Layer** ([`api`]) - Wire DTOs of the backend endpoints
//!
//! ## Redirect resolution
//!
//! [`application::services::ResolverService::resolve`] performs a single
//! lookup and always returns a [`domain::entities::ResolutionResult`]:
//!
//! ```text
//! Pending ──(lookup completes)──> Settled(Redirect | NotFound | Expired |
//!                                         RateLimited | NetworkFailure |
//!                                         MalformedResponse | Unknown)
//! ```
//!
//! [`application::services::RedirectView`] presents the result: a redirect
//! navigates after a short, cancellable delay; an error is shown at once.
//!
//! ## Configuration
//!
//! The `shortly` binary reads its settings from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        DashboardService, RedirectView, ResolverService, ShortenerService,
    };
    pub use crate::domain::entities::{ResolutionResult, ResolutionState, ViewState};
    pub use crate::domain::ports::{Navigator, RedirectLookup, SessionProvider, UrlApi};
    pub use crate::error::ClientError;
    pub use crate::infrastructure::http::HttpUrlApi;
    pub use crate::infrastructure::session::StaticSession;
}
