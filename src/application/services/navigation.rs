//! Delayed navigation with a scoped timer handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::ports::Navigator;

/// Default pause before navigating, long enough for a loading indicator to render.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// A navigation scheduled to fire after a delay.
///
/// The timer lives in a Tokio task owned by this handle. Cancelling or
/// dropping the handle aborts the task; an aborted timer never reaches the
/// [`Navigator`]. The navigator is called at most once.
#[derive(Debug)]
pub struct NavigationHandle {
    task: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

impl NavigationHandle {
    /// Schedules `navigator.navigate(destination)` after `delay` on `runtime`.
    ///
    /// The runtime must have its time driver enabled.
    pub fn schedule<N>(
        runtime: &Handle,
        navigator: Arc<N>,
        destination: String,
        delay: Duration,
    ) -> Self
    where
        N: Navigator + ?Sized + 'static,
    {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if !flag.swap(true, Ordering::SeqCst) {
                debug!("Navigating to {}", destination);
                navigator.navigate(&destination);
            }
        });

        Self { task, fired }
    }

    /// True once the navigation has been performed.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// True if the timer is no longer running, either fired or cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the timer to finish. Returns true if the navigation fired.
    pub async fn wait(&mut self) -> bool {
        if !self.task.is_finished() {
            let _ = (&mut self.task).await;
        }
        self.has_fired()
    }

    /// Releases the handle, cancelling the navigation if it has not fired yet.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for NavigationHandle {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            debug!("Cancelling pending navigation");
            self.task.abort();
        }
    }
}
