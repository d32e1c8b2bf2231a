//! Core entities of the client.
//!
//! Entities are plain data structures; wire formats live in [`crate::api::dto`]
//! and are converted into these types at the infrastructure boundary.
//!
//! # Entity Types
//!
//! - [`ShortCodeQuery`] - One request to resolve a short code
//! - [`ResolutionResult`] / [`ResolutionState`] - Outcome and lifecycle of a lookup
//! - [`User`] - The signed-in user and their tier
//! - [`UrlRecord`], [`ShortenedUrl`], [`Page`] - Dashboard URL listings
//! - [`DashboardStats`] - Account-wide usage figures

pub mod resolution;
pub mod short_code;
pub mod stats;
pub mod url_record;
pub mod user;

pub use resolution::{RedirectViewModel, ResolutionResult, ResolutionState, ViewState};
pub use short_code::{INVALID_SHORT_CODE, InvalidShortCode, ShortCodeQuery};
pub use stats::{DailyClicks, DashboardStats, TopUrl};
pub use url_record::{Page, ShortenedUrl, UrlRecord};
pub use user::{FREE_TIER_URL_LIMIT, Tier, User};
