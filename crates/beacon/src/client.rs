//! Best-effort page-view reporting.
use crate::session::{SessionId, SessionStore};

use serde::Serialize;

use std::time::{Duration, Instant};

/// The path page views are posted to, relative to the endpoint.
pub const TRACK_PATH: &str = "/api/track";

/// The default delay applied to visibility-triggered beacons, avoiding
/// duplicate counting right after a page load.
pub const DEBOUNCE: Duration = Duration::from_secs(1);

/// The JSON body of a single page-view report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// The path of the page being viewed.
    pub page: String,

    /// The session identifier of the reporting tab.
    pub session_id: String,

    /// The user-agent string of the reporting browser.
    pub user_agent: String,

    /// The referring URL, empty when there is none.
    pub referrer: String,
}

/// The reason a single beacon could not be delivered.
///
/// Never surfaced past the [`Client`]; failed beacons are logged at debug
/// level and dropped without retrying.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The POST could not be delivered or was rejected by the endpoint.
    #[error("tracking request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A fire-and-forget page-view tracking client.
///
/// Every report happens on a background task of the ambient tokio
/// runtime; no call blocks, returns an error, or retries. The client is
/// telemetry sugar and must never get in the way of the page.
#[derive(Debug)]
pub struct Client {
    endpoint: String,
    user_agent: String,
    session: SessionId,
    http: reqwest::Client,
    debounce: Duration,
    last_sent: Option<Instant>,
}

impl Client {
    /// Creates a [`Client`] reporting to `endpoint`, loading the tab's
    /// session identifier from `store` or creating it on this first need.
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: impl Into<String>,
        store: &mut impl SessionStore,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            session: SessionId::load_or_create(store),
            http: reqwest::Client::new(),
            debounce: DEBOUNCE,
            last_sent: None,
        }
    }

    /// Overrides the [`DEBOUNCE`] window applied to visibility
    /// retriggers.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The session identifier in use.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Reports a view of `page`.
    ///
    /// The POST is spawned on the ambient tokio runtime and this call
    /// returns immediately; a network failure is logged at debug level
    /// and otherwise ignored. Without an ambient runtime the report is
    /// dropped with a debug log instead.
    pub fn track_page_view(&mut self, page: &str, referrer: &str) {
        self.dispatch(page, referrer, Duration::ZERO);
    }

    /// Handles a change of the hosting tab's visibility.
    ///
    /// Regaining visibility re-reports `page` after the debounce delay,
    /// unless another beacon was already scheduled within the window.
    /// Losing visibility reports nothing.
    pub fn visibility_changed(&mut self, visible: bool, page: &str, referrer: &str) {
        if !visible {
            return;
        }

        if let Some(last) = self.last_sent {
            if last.elapsed() < self.debounce {
                return;
            }
        }

        self.dispatch(page, referrer, self.debounce);
    }

    fn dispatch(&mut self, page: &str, referrer: &str, delay: Duration) {
        // Telemetry must never take the page down: without an ambient
        // runtime the beacon is dropped, not panicked over.
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::debug!("page view tracking skipped: no async runtime");
            return;
        };

        self.last_sent = Some(Instant::now());

        let view = PageView {
            page: page.to_owned(),
            session_id: self.session.as_str().to_owned(),
            user_agent: self.user_agent.clone(),
            referrer: referrer.to_owned(),
        };

        let request = self
            .http
            .post(format!("{}{TRACK_PATH}", self.endpoint))
            .json(&view);

        let _ = runtime.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            if let Err(error) = send(request).await {
                log::debug!("page view tracking failed: {error}");
            }
        });
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<(), Error> {
    let _ = request.send().await?.error_for_status()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    // Nothing listens on the discard port; every send fails fast.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

    #[test]
    fn page_view_serializes_to_the_wire_shape() {
        let view = PageView {
            page: "/stats".to_owned(),
            session_id: "a".repeat(32),
            user_agent: "Mozilla/5.0".to_owned(),
            referrer: "https://example.org/".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({
                "page": "/stats",
                "session_id": "a".repeat(32),
                "user_agent": "Mozilla/5.0",
                "referrer": "https://example.org/",
            })
        );
    }

    #[test]
    fn session_is_created_once_and_reused() {
        let mut store = MemoryStore::new();

        let first = Client::new(DEAD_ENDPOINT, "agent", &mut store);
        let second = Client::new(DEAD_ENDPOINT, "agent", &mut store);

        assert_eq!(first.session(), second.session());
    }

    #[tokio::test]
    async fn network_failure_is_swallowed_and_later_beacons_still_fire() {
        let mut store = MemoryStore::new();
        let mut client = Client::new(DEAD_ENDPOINT, "agent", &mut store)
            .debounce(Duration::from_millis(10));

        client.track_page_view("/", "");
        let first = client.last_sent;
        assert!(first.is_some());

        // Let the failed send resolve, then leave the debounce window.
        tokio::time::sleep(Duration::from_millis(50)).await;

        client.visibility_changed(true, "/", "");
        assert!(client.last_sent > first);
    }

    #[tokio::test]
    async fn visibility_retrigger_within_the_window_is_suppressed() {
        let mut store = MemoryStore::new();
        let mut client = Client::new(DEAD_ENDPOINT, "agent", &mut store)
            .debounce(Duration::from_secs(60));

        client.track_page_view("/", "");
        let first = client.last_sent;

        client.visibility_changed(true, "/", "");
        assert_eq!(client.last_sent, first);
    }

    #[test]
    fn missing_runtime_drops_the_beacon_silently() {
        let mut store = MemoryStore::new();
        let mut client = Client::new(DEAD_ENDPOINT, "agent", &mut store);

        // No tokio runtime here; both entry points must degrade to
        // no-ops rather than abort the caller.
        client.track_page_view("/", "");
        client.visibility_changed(true, "/", "");

        assert!(client.last_sent.is_none());
    }

    #[tokio::test]
    async fn losing_visibility_reports_nothing() {
        let mut store = MemoryStore::new();
        let mut client = Client::new(DEAD_ENDPOINT, "agent", &mut store);

        client.visibility_changed(false, "/", "");

        assert!(client.last_sent.is_none());
    }
}
