//! Client services.

pub mod dashboard_service;
pub mod navigation;
pub mod redirect_view;
pub mod resolver_service;
pub mod shortener_service;

pub use dashboard_service::DashboardService;
pub use navigation::{DEFAULT_REDIRECT_DELAY, NavigationHandle};
pub use redirect_view::RedirectView;
pub use resolver_service::{DEFAULT_LOOKUP_TIMEOUT, ResolverService};
pub use shortener_service::ShortenerService;
