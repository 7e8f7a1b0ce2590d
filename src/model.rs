/// Core data types for the radiation monitoring service.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains no I/O and no parsing logic beyond the
/// sentinel-preserving tag lookups — malformed tags degrade to
/// `Unknown`, they never fail.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Station record
// ---------------------------------------------------------------------------

/// One monitoring station's latest reading, as parsed from the IERNet
/// all-site feed.
///
/// `latitude`/`longitude` are always `None` at parse time; geocoding is
/// performed by an external collaborator after the fact. `dose_equivalent`
/// and `exposure_rate` are always present — a row whose numeric fields
/// fail to parse is kept with 0.0 rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    /// Which monitoring network operates the station.
    pub network: NetworkTag,
    /// Free-text region label (remainder of the feed's compound first
    /// column after the network tag is stripped).
    pub administrative_area: String,
    /// Station name, verbatim from the feed.
    pub location_name: String,
    /// WGS84 latitude, populated downstream.
    pub latitude: Option<f64>,
    /// WGS84 longitude, populated downstream.
    pub longitude: Option<f64>,
    /// Ambient dose equivalent rate, µSv/h.
    pub dose_equivalent: f64,
    /// Exposure rate as reported by the feed.
    pub exposure_rate: f64,
    /// The severity the feed itself reports for this station. Distinct
    /// from the tier computed locally by `alert::thresholds`.
    pub status: FeedStatus,
}

// ---------------------------------------------------------------------------
// Feed tag enumerations
// ---------------------------------------------------------------------------

/// Operator of a monitoring station, from the bracketed prefix of the
/// feed's first column (e.g. `[KINS]`).
///
/// The feed format is undocumented; unrecognized tags map to `Unknown`
/// so new operators appearing upstream never break the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkTag {
    /// Korea Institute of Nuclear Safety national monitoring posts.
    Kins,
    /// Korea Hydro & Nuclear Power plant-perimeter stations.
    Khnp,
    /// Korea Atomic Energy Research Institute site stations.
    Kaeri,
    /// Local-government operated stations.
    LocalGov,
    /// Tag missing or not recognized.
    Unknown,
}

impl NetworkTag {
    /// Looks up a bracketed network tag (brackets already stripped).
    /// Never fails — unrecognized tags become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "KINS" => NetworkTag::Kins,
            "KHNP" => NetworkTag::Khnp,
            "KAERI" => NetworkTag::Kaeri,
            "LOCAL" => NetworkTag::LocalGov,
            _ => NetworkTag::Unknown,
        }
    }
}

/// Station status code as reported in the feed's fifth column.
///
/// These are the feed's own codes, carried through unchanged; local
/// severity classification lives in `alert::thresholds` and does not
/// consult this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedStatus {
    Normal,
    Caution,
    Warning,
    Emergency,
    /// Code missing or not recognized.
    Unknown,
}

impl FeedStatus {
    /// Looks up a feed status code. Never fails — unrecognized codes
    /// become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "0" => FeedStatus::Normal,
            "1" => FeedStatus::Caution,
            "2" => FeedStatus::Warning,
            "3" => FeedStatus::Emergency,
            _ => FeedStatus::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching the IERNet feed.
///
/// Row-level malformations during parsing are deliberately absent from
/// this taxonomy: a partially malformed feed still yields as many usable
/// records as possible, so parse issues are recovered locally in
/// `ingest::iernet` and never escalate.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// A fetch was requested before the cooldown elapsed. Recoverable —
    /// wait, or reuse previously held records.
    Throttled,
    /// The configured endpoint string is not a valid URL. A
    /// configuration defect, not a transient condition.
    UrlConfig(String),
    /// Transport failure, non-2xx response, or a body that failed to
    /// decode as EUC-KR. Carries the underlying cause for diagnostics.
    Transport(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Throttled => write!(f, "fetch throttled: cooldown has not elapsed"),
            FetchError::UrlConfig(url) => write!(f, "invalid endpoint URL: {}", url),
            FetchError::Transport(cause) => write!(f, "transport error: {}", cause),
        }
    }
}

impl std::error::Error for FetchError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
