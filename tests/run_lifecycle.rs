//! End-to-end run lifecycle against the public API (synthetic clock).

use progress_button::{Phase, ProgressState, PROGRESS_STEP, TICK_INTERVAL};
use std::time::Instant;

fn at(t0: Instant, ticks: u32) -> Instant {
    t0 + TICK_INTERVAL * ticks
}

#[test]
fn full_run_climbs_in_exact_steps_and_settles_at_one_hundred() {
    // default sampler: either outcome is valid, the climb must be exact anyway
    let mut state = ProgressState::new();
    let t0 = Instant::now();
    state.click(t0);
    assert!(state.is_running());
    assert_eq!(state.progress(), 0);

    let mut last = 0u8;
    let mut tick = 0u32;
    while state.is_running() {
        tick += 1;
        assert!(tick <= 50, "run should settle after 50 ticks");
        state.poll(at(t0, tick));
        assert_eq!(state.progress(), last + PROGRESS_STEP);
        last = state.progress();
    }

    assert_eq!(state.progress(), 100);
    assert!(state.is_completed() ^ state.has_failed());
}

#[test]
fn each_run_draws_its_own_outcome() {
    let mut flips = [false, true].into_iter();
    let mut state = ProgressState::with_sampler(move || flips.next().unwrap());

    let t0 = Instant::now();
    state.click(t0);
    state.poll(at(t0, 50));
    assert_eq!(state.phase(), Phase::Completed);

    state.click(at(t0, 51));
    let t1 = at(t0, 52);
    state.click(t1);
    state.poll(at(t1, 50));
    assert_eq!(state.phase(), Phase::Failed);
}

#[test]
fn restart_after_reset_behaves_like_a_fresh_run() {
    let mut state = ProgressState::with_sampler(|| true);
    let t0 = Instant::now();
    state.click(t0);
    state.poll(at(t0, 50));
    assert!(state.has_failed());
    assert_eq!(state.progress(), 100);

    // acknowledge, then run again from a clean idle
    state.click(at(t0, 60));
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.progress(), 0);

    let t1 = at(t0, 61);
    state.click(t1);
    assert!(state.is_running());
    state.poll(at(t1, 25));
    assert_eq!(state.progress(), 50);
    state.poll(at(t1, 50));
    assert!(state.has_failed());
    assert_eq!(state.progress(), 100);
}

#[test]
fn settled_runs_ignore_further_time() {
    let mut state = ProgressState::with_sampler(|| false);
    let t0 = Instant::now();
    state.click(t0);
    state.poll(at(t0, 50));
    let settled = state.phase();

    assert!(!state.poll(at(t0, 5_000)));
    assert_eq!(state.phase(), settled);
    assert_eq!(state.progress(), 100);
}
