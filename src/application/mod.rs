//! Application layer services.
//!
//! Services coordinate the domain ports: they never talk HTTP themselves and
//! receive their collaborators as `Arc`-wrapped trait implementations.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Short-code lookup and classification
//! - [`services::redirect_view::RedirectView`] - Redirect screen state and delayed navigation
//! - [`services::shortener_service::ShortenerService`] - URL shortening with tier checks
//! - [`services::dashboard_service::DashboardService`] - URL listing, statistics, deletion

pub mod services;
