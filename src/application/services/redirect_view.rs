//! Redirect screen state: presents a resolution and performs the navigation.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{debug, error, info};

use crate::application::services::navigation::NavigationHandle;
use crate::application::services::resolver_service::ResolverService;
use crate::domain::entities::{RedirectViewModel, ResolutionResult, ResolutionState};
use crate::domain::ports::{Navigator, RedirectLookup};

/// State owned by one redirect screen, for one short code.
///
/// Starts `Pending`. [`RedirectView::present_and_navigate`] settles it once:
/// a redirect schedules a delayed navigation, an error is shown immediately.
/// Later calls are ignored, so at most one navigation happens per view.
///
/// Dropping the view (or calling [`RedirectView::teardown`]) cancels a
/// navigation that has not fired yet.
///
/// The navigation timer runs on the Tokio runtime current when the view is
/// built, or on one given through [`RedirectView::with_runtime`].
pub struct RedirectView<N: Navigator + ?Sized + 'static> {
    short_code: String,
    state: ResolutionState,
    navigator: Arc<N>,
    runtime: Option<Handle>,
    navigation: Option<NavigationHandle>,
}

impl<N: Navigator + ?Sized + 'static> RedirectView<N> {
    pub fn new(short_code: impl Into<String>, navigator: Arc<N>) -> Self {
        Self {
            short_code: short_code.into(),
            state: ResolutionState::Pending,
            navigator,
            runtime: Handle::try_current().ok(),
            navigation: None,
        }
    }

    /// Runs the navigation timer on `runtime`.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Resolves `short_code` and presents the result in a fresh view.
    ///
    /// This is also the retry path: a retry builds a new view rather than
    /// reusing a settled one.
    pub async fn load<L: RedirectLookup>(
        resolver: &ResolverService<L>,
        short_code: &str,
        navigator: Arc<N>,
        delay: Duration,
    ) -> Self {
        let mut view = Self::new(short_code, navigator);
        let result = resolver.resolve(short_code).await;
        view.present_and_navigate(result, delay);
        view
    }

    /// Settles the view with `result`.
    ///
    /// - `Redirect`: schedules navigation to the destination after `delay`
    /// - error kinds: settles immediately, no navigation
    ///
    /// Returns `false` without side effects if the view was already settled.
    ///
    /// Without a Tokio runtime the redirect is still presented, but no
    /// navigation is scheduled and an error is logged.
    pub fn present_and_navigate(&mut self, result: ResolutionResult, delay: Duration) -> bool {
        if !self.state.settle(result) {
            debug!("View for {} already settled, ignoring", self.short_code);
            return false;
        }

        let Some(ResolutionResult::Redirect { destination_url }) = self.state.result() else {
            return true;
        };

        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            error!(
                "No Tokio runtime to navigate {} to {}",
                self.short_code, destination_url
            );
            return true;
        };

        info!(
            "Redirecting {} to {} in {:?}",
            self.short_code, destination_url, delay
        );
        self.navigation = Some(NavigationHandle::schedule(
            &runtime,
            self.navigator.clone(),
            destination_url.clone(),
            delay,
        ));

        true
    }

    /// Snapshot for rendering.
    pub fn view_model(&self) -> RedirectViewModel {
        RedirectViewModel {
            state: self.state.view_state(),
            error_message: self
                .state
                .result()
                .and_then(ResolutionResult::message)
                .map(str::to_string),
            short_code: self.short_code.clone(),
        }
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    /// True once the scheduled navigation has been performed.
    pub fn has_navigated(&self) -> bool {
        self.navigation
            .as_ref()
            .is_some_and(NavigationHandle::has_fired)
    }

    /// Waits until the scheduled navigation has fired.
    ///
    /// Returns `false` immediately when nothing is scheduled (error results).
    pub async fn wait_for_navigation(&mut self) -> bool {
        match self.navigation.as_mut() {
            Some(handle) => handle.wait().await,
            None => false,
        }
    }

    /// Leaves the error screen for the home destination.
    pub fn go_home(&mut self) {
        self.teardown();
        self.navigator.go_home();
    }

    /// Releases the navigation timer. Has no effect once navigation has fired.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.navigation.take() {
            handle.cancel();
        }
    }
}
