//! Dose-rate severity classification.
//!
//! The official alert criteria for the national monitoring network use
//! a rolling 3-year per-site average, which this service cannot obtain
//! per region or automatically. The tiers below are therefore fixed
//! approximations: 0.05–0.30 µSv/h is the usual natural background
//! variation band ("Normal"), below 0.973 µSv/h is "Caution", above it
//! "Warning", and 973 µSv/h and up is "Emergency". This simplification
//! must be surfaced to end users; `THRESHOLD_DISCLAIMER` is the text
//! the UI layer is expected to display.

// ---------------------------------------------------------------------------
// Tier boundaries (µSv/h), each tier's lower bound inclusive
// ---------------------------------------------------------------------------

/// Lower bound of the natural background variation band.
pub const NORMAL_FLOOR_USVH: f64 = 0.05;

/// Upper bound of the natural background variation band.
pub const CAUTION_FLOOR_USVH: f64 = 0.30;

/// Dose rate at which a reading stops being a caution and becomes a
/// warning.
pub const WARNING_FLOOR_USVH: f64 = 0.973;

/// Dose rate at which a reading is treated as an emergency.
pub const EMERGENCY_FLOOR_USVH: f64 = 973.0;

/// Disclaimer the UI layer must surface wherever classified tiers are
/// shown (the thresholds approximate background variation; they are not
/// the official per-site alert criteria).
pub const THRESHOLD_DISCLAIMER: &str =
    "Severity tiers are derived from fixed approximations of natural background \
     variation (0.05\u{2013}0.30 \u{b5}Sv/h normal band), not from the official per-site \
     3-year rolling average alert criteria.";

// ---------------------------------------------------------------------------
// Severity tiers
// ---------------------------------------------------------------------------

/// Dose-rate severity tiers, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityTier {
    /// Below the declared natural background band. Not alarming in
    /// itself, but outside the band worth labeling as such.
    BelowNormal,
    /// Within the natural background variation band.
    Normal,
    Caution,
    Warning,
    Emergency,
}

/// Classifies a dose equivalent rate (µSv/h) into a severity tier.
///
/// Pure and total: negative and NaN inputs are clamped to 0.0 rather
/// than rejected, so classifying any parsed record never panics. Each
/// tier's lower bound is inclusive.
pub fn classify_dose(dose_usvh: f64) -> SeverityTier {
    let dose = if dose_usvh.is_nan() || dose_usvh < 0.0 {
        0.0
    } else {
        dose_usvh
    };

    if dose < NORMAL_FLOOR_USVH {
        SeverityTier::BelowNormal
    } else if dose < CAUTION_FLOOR_USVH {
        SeverityTier::Normal
    } else if dose < WARNING_FLOOR_USVH {
        SeverityTier::Caution
    } else if dose < EMERGENCY_FLOOR_USVH {
        SeverityTier::Warning
    } else {
        SeverityTier::Emergency
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bounds_are_inclusive() {
        assert_eq!(classify_dose(0.05), SeverityTier::Normal);
        assert_eq!(classify_dose(0.30), SeverityTier::Caution);
        assert_eq!(classify_dose(0.973), SeverityTier::Warning);
        assert_eq!(classify_dose(973.0), SeverityTier::Emergency);
    }

    #[test]
    fn test_values_just_below_each_boundary() {
        assert_eq!(classify_dose(0.049999), SeverityTier::BelowNormal);
        assert_eq!(classify_dose(0.299999), SeverityTier::Normal);
        assert_eq!(classify_dose(0.972999), SeverityTier::Caution);
        assert_eq!(classify_dose(972.999), SeverityTier::Warning);
    }

    #[test]
    fn test_typical_background_reading_is_normal() {
        // Most Korean stations report around 0.10-0.15 µSv/h.
        assert_eq!(classify_dose(0.12), SeverityTier::Normal);
    }

    #[test]
    fn test_zero_dose_is_below_normal() {
        assert_eq!(classify_dose(0.0), SeverityTier::BelowNormal);
    }

    #[test]
    fn test_negative_input_is_clamped_not_rejected() {
        // Parse failures default to 0.0 upstream, but a hostile feed
        // could still hand us a negative number.
        assert_eq!(classify_dose(-1.0), SeverityTier::BelowNormal);
        assert_eq!(classify_dose(f64::NEG_INFINITY), SeverityTier::BelowNormal);
    }

    #[test]
    fn test_nan_input_is_clamped_not_rejected() {
        assert_eq!(classify_dose(f64::NAN), SeverityTier::BelowNormal);
    }

    #[test]
    fn test_extreme_dose_is_emergency() {
        assert_eq!(classify_dose(1.0e9), SeverityTier::Emergency);
        assert_eq!(classify_dose(f64::INFINITY), SeverityTier::Emergency);
    }

    #[test]
    fn test_tiers_order_ascending() {
        // PartialOrd on the enum must follow severity order; alerting
        // code compares tiers directly.
        assert!(SeverityTier::BelowNormal < SeverityTier::Normal);
        assert!(SeverityTier::Normal < SeverityTier::Caution);
        assert!(SeverityTier::Caution < SeverityTier::Warning);
        assert!(SeverityTier::Warning < SeverityTier::Emergency);
    }

    #[test]
    fn test_disclaimer_mentions_the_simplification() {
        assert!(THRESHOLD_DISCLAIMER.contains("approximation"));
    }
}
