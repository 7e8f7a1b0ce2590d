/// Severity evaluation.
///
/// Submodules:
/// - `thresholds` — dose-rate severity tier classification.

pub mod thresholds;
