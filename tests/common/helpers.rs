use std::time::Duration;

use barstate::bar::{BarOption, BarState};
use barstate::decor::{decorator, DecoratorFunc, Statistics};
use barstate::progress::Progress;
use tracing_subscriber::EnvFilter;

// Common test constants
pub const SECOND: Duration = Duration::from_secs(1);
pub const TEST_TOTAL: u64 = 100;

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// === Decorator Helpers ===

/// Creates a decorator that always renders `tag`
pub fn tagged(tag: &str) -> DecoratorFunc {
    let tag = tag.to_string();
    decorator(move |_| tag.clone())
}

/// Creates `count` tagged decorators named `{prefix}0`, `{prefix}1`, ...
pub fn tagged_many(prefix: &str, count: usize) -> Vec<DecoratorFunc> {
    (0..count).map(|i| tagged(&format!("{prefix}{i}"))).collect()
}

/// Renders every decorator of a list separately, in order
pub fn render_each<'a>(
    decorators: impl Iterator<Item = &'a DecoratorFunc>,
    stats: &Statistics,
) -> Vec<String> {
    decorators.map(|d| d(stats)).collect()
}

// === State Helpers ===

/// Creates a bar state with the test total and the given options
pub fn create_state(options: Vec<BarOption>) -> BarState {
    init_tracing();
    BarState::with_options(TEST_TOTAL, options)
}

/// Creates an auto-incrementing bar state
pub fn create_auto_incr_state(total: u64, trigger: u64, amount: u64) -> BarState {
    init_tracing();
    BarState::with_options(total, [BarOption::AutoIncrTotal { trigger, amount }])
}

/// Reports `work` units in a series of one second samples
pub fn report_seconds(state: &mut BarState, samples: &[u64]) {
    for work in samples {
        state.report(SECOND, *work);
    }
}

/// Creates a hidden progress container
pub fn create_hidden_progress() -> Progress {
    init_tracing();
    Progress::hidden()
}

// === Assertion Helpers ===

/// Asserts two floats are equal within a small tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Asserts the smoothed rate of a state
pub fn assert_rate(state: &BarState, expected: f64) {
    let rate = state
        .eta_accumulator()
        .smoothed_rate()
        .expect("smoothed rate should be set");
    assert_close(rate, expected);
}
