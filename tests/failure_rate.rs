//! Statistical check of the weighted outcome draw.

use progress_button::{ProgressState, FAILURE_RATE, TICK_INTERVAL};
use std::time::Instant;

#[test]
fn failure_rate_converges_to_the_configured_weight() {
    const RUNS: u32 = 10_000;

    let mut state = ProgressState::new();
    let mut t = Instant::now();
    let mut failures = 0u32;

    for _ in 0..RUNS {
        state.click(t);
        t += TICK_INTERVAL * 50;
        state.poll(t);
        assert_eq!(state.progress(), 100);
        if state.has_failed() {
            failures += 1;
        }
        t += TICK_INTERVAL;
        state.click(t); // acknowledge back to idle
    }

    let rate = failures as f64 / RUNS as f64;
    // ~10 standard deviations of slack around the configured 0.30
    assert!(
        (rate - FAILURE_RATE).abs() < 0.05,
        "empirical failure rate {rate} strays too far from {FAILURE_RATE}"
    );
}
