/// Test fixtures: representative payloads from the IERNet all-site feed.
///
/// These fixtures are structurally faithful but truncated to the
/// minimum needed to exercise the parser. They reflect the real feed
/// shape served by `FEED_URL`:
///
///   - CR+LF row separators, one header row first
///   - per row: `[NetworkTag]AreaLabel,LocationName,"=Dose",Exposure,Status`
///   - the dose column is wrapped as `"=0.123"` (spreadsheet-escape)
///   - area and name fields are Korean in the live feed
///
/// Fixtures are already decoded; EUC-KR byte-level decoding is covered
/// separately in `iernet::tests` with raw byte literals.

/// Just the header row — the feed's shape when no stations report.
#[cfg(test)]
pub(crate) fn fixture_header_only() -> &'static str {
    "지역,관측소,선량률,공간감마,상태"
}

/// Three well-formed stations across two networks, ascending dose.
#[cfg(test)]
pub(crate) fn fixture_three_stations() -> &'static str {
    "지역,관측소,선량률,공간감마,상태\r\n\
     [KINS]Seoul,StationA,\"=0.12\",0.08,0\r\n\
     [KINS]Busan,StationB,\"=0.31\",0.21,1\r\n\
     [KHNP]Ulsan,StationC,\"=1.20\",0.95,2"
}

/// A 4-column row sandwiched between two well-formed rows. The short
/// row must be skipped without poisoning its neighbors.
#[cfg(test)]
pub(crate) fn fixture_mixed_rows() -> &'static str {
    "지역,관측소,선량률,공간감마,상태\r\n\
     [KINS]Seoul,StationA,\"=0.12\",0.08,0\r\n\
     [KINS]Daegu,StationB,\"=0.15\"\r\n\
     [KINS]Gwangju,StationC,\"=0.09\",0.07,0"
}
