//! Navigation port.

/// Performs a full navigation to a destination URL.
///
/// Called at most once per resolved query, from the task that owns the
/// delayed-navigation timer.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &str);

    /// Leaves the redirect screen for the home destination.
    fn go_home(&self);
}
