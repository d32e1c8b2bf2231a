//! Signed-in user as seen by the client.

use std::fmt;
use std::str::FromStr;

/// Number of URLs a free-tier account may create.
pub const FREE_TIER_URL_LIMIT: u64 = 100;

/// Subscription tier of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "premium" => Ok(Self::Premium),
            other => Err(format!("unknown tier '{other}'")),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("free"),
            Self::Premium => f.write_str("premium"),
        }
    }
}

/// The current user, provided by a [`crate::domain::ports::SessionProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: Option<String>,
    pub tier: Tier,
    pub url_count: u64,
}

impl User {
    pub fn new(email: Option<String>, tier: Tier, url_count: u64) -> Self {
        Self {
            email,
            tier,
            url_count,
        }
    }

    /// Returns true if the user may not create more URLs on their tier.
    pub fn has_reached_limit(&self) -> bool {
        self.tier == Tier::Free && self.url_count >= FREE_TIER_URL_LIMIT
    }
}
