/// Feed ingestion.
///
/// Submodules:
/// - `iernet` — IERNet all-site feed: EUC-KR decoding + text parsing.
/// - `fixtures` (test only) — representative feed payloads.

pub mod iernet;

#[cfg(test)]
pub(crate) mod fixtures;
