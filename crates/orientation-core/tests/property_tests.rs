//! Property-based tests for the countdown breakdown
//!
//! Uses proptest to check the breakdown adds back up to the time left and
//! stays within each unit's range.

use chrono::NaiveDateTime;
use orientation_core::{CountdownState, TimerUnit};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Targets anywhere from 1970 to roughly 2286
fn target_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000_000_000
}

/// Up to about three years ahead of now
fn lead_strategy() -> impl Strategy<Value = i64> {
    1i64..100_000_000_000
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The fields add back up to the whole seconds left
    #[test]
    fn breakdown_sums_to_remaining(target in target_strategy(), lead in lead_strategy()) {
        let now = target - lead;
        let state = CountdownState::between(target, now).unwrap();
        prop_assert_eq!(state.total_seconds(), (lead / 1000) as u64);
    }

    /// Hours, minutes and seconds never overflow their unit
    #[test]
    fn fields_within_range(target in target_strategy(), lead in 0i64..100_000_000_000) {
        let state = CountdownState::between(target, target - lead).unwrap();
        prop_assert!(state.hours < 24);
        prop_assert!(state.minutes < 60);
        prop_assert!(state.seconds < 60);
    }

    /// Same inputs, same output
    #[test]
    fn recompute_is_idempotent(target in target_strategy(), lead in lead_strategy()) {
        let first = CountdownState::between(target, target - lead);
        let second = CountdownState::between(target, target - lead);
        prop_assert_eq!(first, second);
    }

    /// Any instant past the target is expired
    #[test]
    fn past_target_is_expired(target in target_strategy(), late in 1i64..100_000_000_000) {
        prop_assert_eq!(CountdownState::between(target, target + late), None);
    }

    /// Padded strings are at least two digits and parse back to the value
    #[test]
    fn padding_preserves_value(lead in 0u64..100_000_000_000) {
        let state = CountdownState::from_remaining_ms(lead);
        let padded = state.padded();
        for unit in TimerUnit::ALL {
            let text = padded.get(unit);
            prop_assert!(text.len() >= 2);
            prop_assert_eq!(text.parse::<u64>().unwrap(), state.get(unit));
        }
    }
}

// ============================================================================
// Fixed Scenarios
// ============================================================================

fn epoch_ms(s: &str) -> i64 {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

/// One day before the orientation starts
#[test]
fn test_one_day_before_event() {
    let target = epoch_ms("2025-02-21T11:00:00");
    let now = epoch_ms("2025-02-20T11:00:00");

    let padded = CountdownState::between(target, now).unwrap().padded();
    let json = serde_json::to_value(&padded).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "days": "01",
            "hours": "00",
            "minutes": "00",
            "seconds": "00"
        })
    );
}

/// At the target instant every field is zero
#[test]
fn test_at_event_start() {
    let target = epoch_ms("2025-02-21T11:00:00");
    let state = CountdownState::between(target, target).unwrap();
    assert_eq!(state, CountdownState::ZERO);
    assert_eq!(state.padded().to_string(), "00d 00h 00m 00s");
}

/// Mixed units, checked by hand
#[test]
fn test_mixed_units() {
    let target = epoch_ms("2025-02-21T11:00:00");
    let now = epoch_ms("2025-02-18T07:34:15");

    let state = CountdownState::between(target, now).unwrap();
    assert_eq!(state.days, 3);
    assert_eq!(state.hours, 3);
    assert_eq!(state.minutes, 25);
    assert_eq!(state.seconds, 45);
}
