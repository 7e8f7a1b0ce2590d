/// Fetch cooldown gating.
///
/// The feed endpoint is refreshed from UI-driven call sites, which can
/// fire in rapid succession (screen re-appearing, manual refresh). The
/// gate enforces a minimum interval between attempts so redundant calls
/// are rejected before touching the network.
///
/// # Clock injection
/// All time-dependent methods accept a `now: DateTime<Utc>` parameter
/// rather than calling `Utc::now()` internally. This makes throttling
/// purely deterministic in tests without mocking or time manipulation.

use chrono::{DateTime, Duration, Utc};

// ---------------------------------------------------------------------------
// Fetch gate
// ---------------------------------------------------------------------------

/// A cooldown gate: one optional last-attempt timestamp plus a fixed
/// interval.
///
/// The timestamp is recorded at fetch *initiation*, not on success, so
/// an attempt that later fails at the network layer still consumes the
/// cooldown window. The gate has no internal locking; it is owned by
/// the fetcher and mutated through `&mut self`, which makes concurrent
/// access a compile error rather than a race.
#[derive(Debug)]
pub struct FetchGate {
    last_attempt: Option<DateTime<Utc>>,
    cooldown: Duration,
}

impl FetchGate {
    /// Creates a gate with the given cooldown. No attempt is on record,
    /// so the first check never throttles.
    pub fn new(cooldown_secs: i64) -> Self {
        Self {
            last_attempt: None,
            cooldown: Duration::seconds(cooldown_secs),
        }
    }

    /// Returns `true` iff an attempt is on record and less than the
    /// cooldown has elapsed since it. No side effects.
    ///
    /// The comparison is strictly less than: an attempt made exactly at
    /// the cooldown boundary is allowed through.
    pub fn should_throttle_at(&self, now: DateTime<Utc>) -> bool {
        match self.last_attempt {
            Some(last) => now - last < self.cooldown,
            None => false,
        }
    }

    /// Unconditionally records `now` as the latest attempt.
    pub fn record_attempt(&mut self, now: DateTime<Utc>) {
        self.last_attempt = Some(now);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// A fixed "now" used across all tests: 2024-05-01 13:00:00 UTC.
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_fresh_gate_never_throttles() {
        let gate = FetchGate::new(300);
        assert!(
            !gate.should_throttle_at(fixed_now()),
            "gate with no recorded attempt must not throttle"
        );
    }

    #[test]
    fn test_attempt_within_cooldown_is_throttled() {
        let mut gate = FetchGate::new(300);
        gate.record_attempt(fixed_now());

        let one_minute_later = fixed_now() + Duration::seconds(60);
        assert!(
            gate.should_throttle_at(one_minute_later),
            "second attempt 60s after the first must be throttled with a 300s cooldown"
        );
    }

    #[test]
    fn test_attempt_one_second_before_boundary_is_throttled() {
        let mut gate = FetchGate::new(300);
        gate.record_attempt(fixed_now());

        let just_inside = fixed_now() + Duration::seconds(299);
        assert!(gate.should_throttle_at(just_inside));
    }

    #[test]
    fn test_attempt_exactly_at_boundary_is_allowed() {
        // Throttling is strictly less than the cooldown, so an attempt
        // exactly 300s later goes through.
        let mut gate = FetchGate::new(300);
        gate.record_attempt(fixed_now());

        let at_boundary = fixed_now() + Duration::seconds(300);
        assert!(
            !gate.should_throttle_at(at_boundary),
            "attempt exactly at the cooldown boundary must not be throttled"
        );
    }

    #[test]
    fn test_attempt_after_cooldown_is_allowed() {
        let mut gate = FetchGate::new(300);
        gate.record_attempt(fixed_now());

        let later = fixed_now() + Duration::seconds(301);
        assert!(!gate.should_throttle_at(later));
    }

    #[test]
    fn test_record_attempt_overwrites_previous() {
        let mut gate = FetchGate::new(300);
        gate.record_attempt(fixed_now());

        // A later attempt restarts the window from its own time.
        let second_attempt = fixed_now() + Duration::seconds(400);
        gate.record_attempt(second_attempt);

        let shortly_after_second = second_attempt + Duration::seconds(100);
        assert!(
            gate.should_throttle_at(shortly_after_second),
            "window must restart from the most recent attempt"
        );
    }

    #[test]
    fn test_check_has_no_side_effects() {
        let mut gate = FetchGate::new(300);
        gate.record_attempt(fixed_now());

        let probe = fixed_now() + Duration::seconds(10);
        // Repeated checks must not extend or reset the window.
        for _ in 0..5 {
            assert!(gate.should_throttle_at(probe));
        }
        assert!(!gate.should_throttle_at(fixed_now() + Duration::seconds(300)));
    }

    #[test]
    fn test_zero_cooldown_never_throttles_after_any_elapse() {
        let mut gate = FetchGate::new(0);
        gate.record_attempt(fixed_now());
        assert!(!gate.should_throttle_at(fixed_now()));
    }
}
