/// Feed fetch orchestration.
///
/// `FeedFetcher` coordinates the cooldown gate, the HTTP retrieval, the
/// EUC-KR body decode, and the feed parse, returning either the parsed
/// station list or a `FetchError`. Each call produces exactly one
/// result by construction.
///
/// Fetchers are constructed explicitly and passed to their callers —
/// there is no process-global instance. Tests build as many
/// independently throttled fetchers as they need. The gate state lives
/// on the fetcher and `fetch` takes `&mut self`, so two calls on one
/// fetcher cannot race the check-then-record sequence; callers that
/// genuinely share a fetcher across threads wrap it in their own
/// `Mutex`.

use chrono::{DateTime, Utc};

use crate::config::FetchConfig;
use crate::ingest::iernet;
use crate::logging;
use crate::model::{FetchError, StationRecord};
use crate::throttle::FetchGate;

// ---------------------------------------------------------------------------
// Fetcher
// ---------------------------------------------------------------------------

pub struct FeedFetcher {
    config: FetchConfig,
    gate: FetchGate,
    client: reqwest::blocking::Client,
}

impl FeedFetcher {
    /// Creates a fetcher with the given configuration. The gate starts
    /// empty, so the first fetch is never throttled.
    pub fn new(config: FetchConfig) -> Self {
        let gate = FetchGate::new(config.cooldown_secs);
        Self {
            config,
            gate,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetches, decodes, and parses the feed using the real clock.
    pub fn fetch(&mut self) -> Result<Vec<StationRecord>, FetchError> {
        self.fetch_at(Utc::now())
    }

    /// Clock-injected variant of [`fetch`](Self::fetch); throttling
    /// decisions are made against the supplied `now`.
    ///
    /// # Errors
    /// - `FetchError::Throttled` — called again before the cooldown
    ///   elapsed. No network traffic is issued.
    /// - `FetchError::UrlConfig` — the configured endpoint is not a
    ///   valid URL.
    /// - `FetchError::Transport` — request failure, non-2xx status, or
    ///   a body that is not valid EUC-KR.
    pub fn fetch_at(&mut self, now: DateTime<Utc>) -> Result<Vec<StationRecord>, FetchError> {
        let result = self.try_fetch(now);
        if let Err(e) = &result {
            logging::log_fetch_failure(e);
        }
        result
    }

    fn try_fetch(&mut self, now: DateTime<Utc>) -> Result<Vec<StationRecord>, FetchError> {
        if self.gate.should_throttle_at(now) {
            return Err(FetchError::Throttled);
        }

        // A bad endpoint string is a configuration defect; it does not
        // consume the cooldown window, since re-invoking cannot help.
        let url = reqwest::Url::parse(&self.config.endpoint_url)
            .map_err(|e| FetchError::UrlConfig(format!("{}: {}", self.config.endpoint_url, e)))?;

        // The window is consumed at initiation: a request that fails in
        // flight still counts against the cooldown.
        self.gate.record_attempt(now);

        // The feed is queried with a bare POST - no body, no parameters.
        let response = self
            .client
            .post(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let text = iernet::decode_feed(&bytes)?;
        let records = iernet::parse_feed(&text);
        logging::log_fetch_summary(iernet::data_row_count(&text), records.len());
        Ok(records)
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
