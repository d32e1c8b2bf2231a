//! Traits for the client's external collaborators.
//!
//! # Ports
//!
//! - [`RedirectLookup`] - Short-code lookup against the backend
//! - [`UrlApi`] - Authenticated URL management endpoints
//! - [`Navigator`] - Performs the final navigation
//! - [`SessionProvider`] - Exposes the signed-in user
//!
//! Test mocks are generated with `mockall` under `cfg(test)`.

pub mod navigator;
pub mod session;
pub mod url_api;

pub use navigator::Navigator;
pub use session::SessionProvider;
pub use url_api::{LookupResponse, RedirectLookup, TransportError, UrlApi, UrlListQuery};

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use session::MockSessionProvider;
#[cfg(test)]
pub use url_api::{MockRedirectLookup, MockUrlApi};
