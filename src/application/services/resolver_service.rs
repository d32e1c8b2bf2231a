//! Short-code resolution service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::api::dto::url::LookupBody;
use crate::domain::entities::{INVALID_SHORT_CODE, ResolutionResult, ShortCodeQuery};
use crate::domain::ports::{LookupResponse, RedirectLookup, TransportError};

/// Counter of settled resolutions, labelled by `outcome` ([`ResolutionResult::kind`]).
///
/// Emitted through the `metrics` facade; it is recorded only when the
/// embedding application installs a recorder.
pub const OUTCOMES_METRIC: &str = "resolver_outcomes_total";

/// Default bound on a single lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns a short code into a [`ResolutionResult`].
///
/// Tolerates both conventions the backend uses for a hit: a 301/302 with a
/// `Location` header, or a 2xx with a JSON body carrying `url`. Every failure
/// is folded into the result, so [`ResolverService::resolve`] has no error path.
///
/// The service holds no per-query state; concurrent `resolve` calls for
/// different codes do not interact.
pub struct ResolverService<L: RedirectLookup> {
    lookup: Arc<L>,
    timeout: Duration,
}

impl<L: RedirectLookup> ResolverService<L> {
    /// Creates a resolver whose lookups are bounded by `timeout`.
    pub fn new(lookup: Arc<L>, timeout: Duration) -> Self {
        Self { lookup, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves `code` with a single lookup.
    ///
    /// # Behavior
    ///
    /// - Empty code: `Unknown("invalid short code")`, no request is made
    /// - Lookup exceeding the timeout: `NetworkFailure`
    /// - Otherwise the response or transport error is classified
    ///
    /// Never retries. A retry is a new call by the caller.
    #[instrument(skip(self), fields(outcome = tracing::field::Empty))]
    pub async fn resolve(&self, code: &str) -> ResolutionResult {
        let query = match ShortCodeQuery::new(code) {
            Ok(query) => query,
            Err(e) => {
                warn!("Refusing to resolve: {}", e);
                return self.settle(ResolutionResult::unknown(INVALID_SHORT_CODE));
            }
        };

        debug!("Looking up short code {}", query);

        let result = match tokio::time::timeout(self.timeout, self.lookup.lookup(query.code())).await
        {
            Ok(Ok(response)) => classify_response(&response),
            Ok(Err(e)) => classify_transport_error(&e),
            Err(_) => {
                warn!("Lookup for {} timed out after {:?}", query, self.timeout);
                ResolutionResult::NetworkFailure
            }
        };

        self.settle(result)
    }

    fn settle(&self, result: ResolutionResult) -> ResolutionResult {
        tracing::Span::current().record("outcome", result.kind());
        record_outcome(&result);

        match &result {
            ResolutionResult::Redirect { destination_url } => {
                info!("Resolved to {}", destination_url);
            }
            ResolutionResult::Unknown { detail } => {
                warn!("Resolution failed: {}", detail);
            }
            other => {
                info!("Resolution failed: {}", other.kind());
            }
        }

        result
    }
}

/// Increments [`OUTCOMES_METRIC`] for `result`.
pub fn record_outcome(result: &ResolutionResult) {
    metrics::counter!(OUTCOMES_METRIC, "outcome" => result.kind()).increment(1);
}

/// Classifies a response that carried an HTTP status.
///
/// | Status | Condition | Result |
/// |---|---|---|
/// | 301, 302 | `Location` present | `Redirect` |
/// | 301, 302 | no `Location` | `MalformedResponse` |
/// | 2xx | body has non-empty `url` | `Redirect` |
/// | 2xx | anything else | `MalformedResponse` |
/// | 404 / 410 / 429 | | `NotFound` / `Expired` / `RateLimited` |
/// | other | | `Unknown` |
pub fn classify_response(response: &LookupResponse) -> ResolutionResult {
    match response.status {
        301 | 302 => match response.location.as_deref().map(str::trim) {
            Some(location) if !location.is_empty() => ResolutionResult::redirect(location),
            _ => ResolutionResult::MalformedResponse,
        },
        200..=299 => match LookupBody::destination_from(&response.body) {
            Some(url) => ResolutionResult::redirect(url),
            None => ResolutionResult::MalformedResponse,
        },
        404 => ResolutionResult::NotFound,
        410 => ResolutionResult::Expired,
        429 => ResolutionResult::RateLimited,
        status => ResolutionResult::unknown(format!("unexpected status {status}")),
    }
}

/// Classifies a failure that produced no HTTP status.
pub fn classify_transport_error(error: &TransportError) -> ResolutionResult {
    match error {
        TransportError::Connect(_) | TransportError::Timeout => ResolutionResult::NetworkFailure,
        TransportError::Request(reason) => {
            let detail = reason.lines().next().unwrap_or("request failed");
            ResolutionResult::unknown(detail.chars().take(120).collect::<String>())
        }
    }
}
