//! Tests for ETA smoothing and the dynamic total controller.

use std::time::Duration;

use barstate::bar::{BarBuilder, BarOption};
use barstate::estimate::{AutoIncrement, Eta};

mod common;
use common::helpers::*;

// ETA smoothing

#[test]
fn test_eta_unknown_before_first_sample() {
    let state = create_state(vec![]);
    assert_eq!(state.eta_accumulator().smoothed_rate(), None);
    assert_eq!(state.current_eta(), Eta::Unknown);
    assert_eq!(state.current_eta().to_string(), "unknown");
}

#[test]
fn test_eta_steady_rate() {
    let mut state = create_state(vec![BarOption::EtaAlpha(0.25)]);
    report_seconds(&mut state, &[10, 10, 10, 10]);

    assert_rate(&state, 10.0);
    assert_eq!(state.current(), 40);
    assert_eq!(state.current_eta(), Eta::Known(Duration::from_secs(6)));
}

#[test]
fn test_eta_converges_monotonically() {
    let mut state = create_state(vec![BarOption::EtaAlpha(0.25)]);
    state.report(SECOND, 2);

    let mut previous = 2.0;
    for _ in 0..4 {
        state.report(SECOND, 10);
        let rate = state.eta_accumulator().smoothed_rate().unwrap();
        assert!(rate > previous && rate < 10.0);
        previous = rate;
    }

    // 2 -> 4 -> 5.5 -> 6.625 -> 7.46875
    assert_rate(&state, 7.46875);
    let expected = (TEST_TOTAL - 42) as f64 / 7.46875;
    assert_eq!(
        state.current_eta(),
        Eta::Known(Duration::from_secs_f64(expected))
    );
}

#[test]
fn test_eta_alpha_weights_recent_samples() {
    let mut slow = create_state(vec![BarOption::EtaAlpha(0.1)]);
    let mut fast = create_state(vec![BarOption::EtaAlpha(0.9)]);
    report_seconds(&mut slow, &[10, 20]);
    report_seconds(&mut fast, &[10, 20]);

    assert_rate(&slow, 11.0);
    assert_rate(&fast, 19.0);
}

#[test]
fn test_eta_uses_elapsed_time() {
    let mut state = create_state(vec![]);
    state.report(Duration::from_millis(500), 10);
    assert_rate(&state, 20.0);
    assert_eq!(state.elapsed(), Duration::from_millis(500));
}

#[test]
fn test_zero_elapsed_sample_is_ignored() {
    let mut state = create_state(vec![]);
    state.report(Duration::ZERO, 5);
    assert_eq!(state.eta_accumulator().smoothed_rate(), None);
    assert_eq!(state.current_eta(), Eta::Unknown);

    state.report(SECOND, 10);
    state.report(Duration::ZERO, 5);
    assert_rate(&state, 10.0);
    // The work itself still counts towards the position.
    assert_eq!(state.current(), 20);
}

#[test]
fn test_zero_rate_reports_unknown() {
    let mut state = create_state(vec![]);
    state.report(SECOND, 0);
    assert_rate(&state, 0.0);
    assert_eq!(state.current_eta(), Eta::Unknown);
}

#[test]
fn test_zero_alpha_keeps_first_rate() {
    let mut state = create_state(vec![BarOption::EtaAlpha(0.0)]);
    report_seconds(&mut state, &[5, 50, 500]);
    assert_rate(&state, 5.0);
}

#[test]
fn test_eta_zero_once_complete() {
    let mut state = create_state(vec![]);
    report_seconds(&mut state, &[60, 60]);
    assert!(state.is_completed());
    assert_eq!(state.current(), TEST_TOTAL);
    assert_eq!(state.current_eta(), Eta::Known(Duration::ZERO));
}

#[test]
fn test_queries_are_idempotent() {
    let mut state = create_auto_incr_state(100, 10, 20);
    report_seconds(&mut state, &[30, 60]);

    let eta = state.current_eta();
    let total = state.current_total();
    assert_eq!(state.current_eta(), eta);
    assert_eq!(state.current_total(), total);
    assert_eq!(state.statistics(), state.statistics());
}

// Dynamic total

#[test]
fn test_auto_increment_fires_at_boundary() {
    let mut state = create_auto_incr_state(100, 10, 20);

    state.report(SECOND, 89);
    assert_eq!(state.current_total(), 100);

    state.report(SECOND, 1);
    assert_eq!(state.current(), 90);
    assert_eq!(state.current_total(), 120);

    state.report(SECOND, 17);
    assert_eq!(state.current(), 107);
    assert_eq!(state.current_total(), 120);

    state.report(SECOND, 1);
    assert_eq!(state.current(), 108);
    assert_eq!(state.current_total(), 140);
    assert!(!state.is_completed());
}

#[test]
fn test_auto_increment_fires_once_per_update() {
    let mut state = create_auto_incr_state(100, 50, 10);

    // 95% done: far past the trigger, yet only one increment per update.
    state.report(SECOND, 95);
    assert_eq!(state.current_total(), 110);

    // The horizon keeps receding until half of the total remains again.
    for expected in (120..=200).step_by(10) {
        state.report(Duration::ZERO, 0);
        assert_eq!(state.current_total(), expected);
    }
    state.report(Duration::ZERO, 0);
    assert_eq!(state.current_total(), 200);
}

#[test]
fn test_trigger_zero_fires_only_at_total() {
    let mut state = create_auto_incr_state(1000, 0, 10);
    state.report(SECOND, 999);
    assert_eq!(state.current_total(), 1000);

    state.report(SECOND, 1);
    assert_eq!(state.current_total(), 1010);
}

#[test]
fn test_trigger_100_fires_on_every_update() {
    let mut state = create_auto_incr_state(10, 100, 1);
    for expected in 11..=15 {
        state.report(SECOND, 0);
        assert_eq!(state.current_total(), expected);
    }
}

#[test]
fn test_static_total_never_grows() {
    let mut state = create_state(vec![]);
    report_seconds(&mut state, &[95, 10]);
    assert_eq!(state.current_total(), TEST_TOTAL);
    assert_eq!(state.current(), TEST_TOTAL);
    assert!(state.is_completed());

    // Further reports are ignored.
    state.report(SECOND, 10);
    assert_eq!(state.current(), TEST_TOTAL);
}

#[test]
fn test_dynamic_total_without_auto_increment() {
    let mut state = create_state(vec![BarOption::DynamicTotal]);
    report_seconds(&mut state, &[100, 20]);
    assert_eq!(state.current_total(), TEST_TOTAL);
    assert_eq!(state.current(), 120);
    assert!(!state.is_completed());

    state.set_total(150, false);
    assert_eq!(state.current_total(), 150);
    assert!(!state.is_completed());
}

#[test]
fn test_growth_does_not_reset_smoothed_rate() {
    let mut state = create_auto_incr_state(100, 10, 20);
    report_seconds(&mut state, &[45, 45]);
    assert_eq!(state.current_total(), 120);
    assert_rate(&state, 45.0);
    assert_eq!(state.current_eta(), Eta::Known(Duration::from_secs_f64(30.0 / 45.0)));
}

#[test]
fn test_set_total_final_stops_growth() {
    let mut state = create_auto_incr_state(100, 10, 20);
    state.report(SECOND, 90);
    assert_eq!(state.current_total(), 120);

    state.set_total(130, true);
    assert!(state.dynamic_total().is_finalized());
    state.report(SECOND, 40);
    assert_eq!(state.current_total(), 130);
    assert_eq!(state.current(), 130);
    assert!(state.is_completed());
}

#[test]
fn test_set_total_final_below_current_completes() {
    let mut state = create_state(vec![BarOption::DynamicTotal]);
    state.report(SECOND, 80);
    state.set_total(50, true);
    assert!(state.is_completed());
    assert_eq!(state.current(), 50);
}

#[test]
fn test_complete_marks_done() {
    let mut state = BarBuilder::new(100).auto_incr_total(10, 20).build();
    state.report(SECOND, 40);
    state.complete();
    assert!(state.is_completed());
    assert_eq!(state.current(), 100);
    assert_eq!(state.current_eta(), Eta::Known(Duration::ZERO));
}

#[test]
fn test_auto_increment_is_armed() {
    let auto = AutoIncrement {
        trigger: 10,
        amount: 20,
    };
    assert!(!auto.is_armed(89, 100));
    assert!(auto.is_armed(90, 100));
    assert!(auto.is_armed(150, 100));

    let zero = AutoIncrement {
        trigger: 0,
        amount: 1,
    };
    assert!(!zero.is_armed(999, 1000));
    assert!(zero.is_armed(1000, 1000));
    assert!(zero.is_armed(0, 0));
}

#[test]
fn test_eta_display() {
    assert_eq!(Eta::Unknown.to_string(), "unknown");
    assert!(Eta::Known(Duration::from_secs(90)).is_known());
    assert_eq!(
        Eta::Known(Duration::from_secs(6)).as_duration(),
        Some(Duration::from_secs(6))
    );
    assert!(!Eta::Known(Duration::from_secs(6)).to_string().is_empty());
}

#[test]
fn test_elapsed_saturates() {
    let mut state = create_state(vec![]);
    state.report(Duration::MAX, 1);
    state.report(SECOND, 1);
    state.report(Duration::MAX, 1);
    assert_eq!(state.elapsed(), Duration::MAX);
    assert_eq!(state.current(), 3);
}

#[test]
fn test_dynamic_total_without_amount_keeps_total() {
    let mut state = create_state(vec![BarOption::DynamicTotal]);
    report_seconds(&mut state, &[100, 0, 5, 0]);
    assert_eq!(state.current_total(), TEST_TOTAL);
    assert_eq!(state.current(), 105);
    assert!(!state.is_completed());
}
