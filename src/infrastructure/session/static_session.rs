//! Session built once from configuration.

use crate::domain::entities::User;
use crate::domain::ports::SessionProvider;

/// A fixed session: either anonymous, or a user with an API token.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<User>,
    token: Option<String>,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
        }
    }

    /// Replaces the user's URL count, e.g. after reading it from the dashboard.
    pub fn with_url_count(mut self, url_count: u64) -> Self {
        if let Some(user) = self.user.as_mut() {
            user.url_count = url_count;
        }
        self
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}
