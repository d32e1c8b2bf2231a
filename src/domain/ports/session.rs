//! Session port.

use crate::domain::entities::User;

/// Read-only view of the current session.
///
/// Injected into services instead of being read from global state, so they
/// can be exercised without a real session store.
#[cfg_attr(test, mockall::automock)]
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;

    /// Bearer token for authenticated endpoints.
    fn access_token(&self) -> Option<String>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
