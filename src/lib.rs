/// radmon_service: national radiation monitoring feed client.
///
/// Periodically retrieves the IERNet all-site feed (EUC-KR encoded,
/// CR+LF/comma delimited text), parses it into typed station records,
/// and classifies dose readings into severity tiers. The crate produces
/// classified records and signals errors; rendering, persistence,
/// geocoding, and alert delivery belong to external collaborators.
///
/// # Module structure
///
/// ```text
/// radmon_service
/// ├── model       — shared data types (StationRecord, NetworkTag, FetchError, …)
/// ├── config      — endpoint/cooldown defaults + optional radmon.toml override
/// ├── throttle    — FetchGate: cooldown gating between fetch attempts
/// ├── fetcher     — FeedFetcher: gate → HTTP POST → decode → parse
/// ├── ingest
/// │   ├── iernet  — IERNet feed: EUC-KR decoding + text parsing
/// │   └── fixtures (test only) — representative feed payloads
/// ├── alert
/// │   └── thresholds — dose-rate severity classification
/// └── logging     — leveled, source-tagged logging
/// ```

/// Public modules
pub mod alert;
pub mod config;
pub mod fetcher;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod throttle;
