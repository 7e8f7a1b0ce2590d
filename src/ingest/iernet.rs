/// IERNet all-site feed client: body decoding + text parsing.
///
/// The Integrated Environmental Radiation Network (IERNet, operated by
/// KINS) publishes a nationwide snapshot of monitoring stations as
/// comma-separated text with CR+LF row separators:
///
///   [NetworkTag]AreaLabel,LocationName,"=DoseEquivalent",ExposureRate,StatusCode
///
/// The format is undocumented and served EUC-KR encoded, so this module
/// decodes with that exact codec (naive UTF-8 would corrupt every
/// Korean field) and parses defensively: malformed rows are skipped or
/// defaulted, never fatal. A partially broken feed should still yield
/// as many usable records as possible.

use encoding_rs::EUC_KR;

use crate::model::{FeedStatus, FetchError, NetworkTag, StationRecord};

/// The IERNet all-site snapshot endpoint. Queried with a bare POST, no
/// body, no parameters.
pub const FEED_URL: &str = "https://iernet.kins.re.kr/all_site.asp";

// ---------------------------------------------------------------------------
// Body decoding
// ---------------------------------------------------------------------------

/// Decodes a raw feed body from EUC-KR.
///
/// # Errors
/// `FetchError::Transport` if the body contains byte sequences that are
/// not valid EUC-KR. The decoder could substitute replacement
/// characters instead, but silently yielding mojibake station names is
/// worse than surfacing the corrupt download.
pub fn decode_feed(bytes: &[u8]) -> Result<String, FetchError> {
    let (text, _, had_errors) = EUC_KR.decode(bytes);
    if had_errors {
        return Err(FetchError::Transport(
            "response body is not valid EUC-KR".to_string(),
        ));
    }
    Ok(text.into_owned())
}

// ---------------------------------------------------------------------------
// Feed parsing
// ---------------------------------------------------------------------------

/// Parses decoded feed text into station records. Never fails.
///
/// Row handling:
/// - The first line is a header and is discarded unconditionally.
/// - Rows with fewer than 5 comma-separated columns are skipped.
/// - A first column with no `]` keeps the row, with `Unknown` network
///   and an empty area label.
/// - Unparsable numeric fields degrade to 0.0; unrecognized tags
///   degrade to `Unknown`.
///
/// Output order matches input row order, minus skipped rows. The whole
/// input is consumed before returning.
pub fn parse_feed(raw: &str) -> Vec<StationRecord> {
    let mut records = Vec::new();

    for line in raw.split("\r\n").skip(1) {
        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() < 5 {
            continue; // insufficient data - skip the row, not the parse
        }

        let (network, administrative_area) = split_network_area(columns[0]);

        // Dose arrives wrapped as "=0.123" to stop spreadsheet apps
        // from reformatting it; strip the wrapping before parsing.
        let dose_equivalent = columns[2]
            .trim_matches(|c| c == '=' || c == '"')
            .parse()
            .unwrap_or(0.0);
        let exposure_rate = columns[3].parse().unwrap_or(0.0);

        records.push(StationRecord {
            network,
            administrative_area,
            location_name: columns[1].to_string(),
            latitude: None,
            longitude: None,
            dose_equivalent,
            exposure_rate,
            status: FeedStatus::from_tag(columns[4]),
        });
    }

    records
}

/// Counts the data rows in decoded feed text: everything after the
/// header, excluding blank lines (a trailing CR+LF is not a row).
///
/// `parse_feed` returns only the surviving records; comparing its
/// output length against this count tells a caller how many rows the
/// parse skipped.
pub fn data_row_count(raw: &str) -> usize {
    raw.split("\r\n")
        .skip(1)
        .filter(|line| !line.is_empty())
        .count()
}

/// Splits the compound first column `[NetworkTag]AreaLabel` at the
/// first `]`. A column with no `]` degrades to `(Unknown, "")` — the
/// row is still emitted by the caller.
fn split_network_area(compound: &str) -> (NetworkTag, String) {
    match compound.find(']') {
        Some(end) => {
            let tag = compound[..=end].trim_matches(|c| c == '[' || c == ']');
            (NetworkTag::from_tag(tag), compound[end + 1..].to_string())
        }
        None => (NetworkTag::Unknown, String::new()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
