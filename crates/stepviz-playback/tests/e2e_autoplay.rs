#![forbid(unsafe_code)]

//! E2E tests for auto-play scheduling.
//!
//! Covers:
//! 1. Auto-stop: a 3-step trace finishes paused on the last snapshot and no
//!    further step is emitted afterwards.
//! 2. The 5-snapshot end-to-end scenario.
//! 3. Pause cancels the pending tick wait.
//! 4. Loading a new trace mid-playback replaces atomically.
//! 5. A speed change applies to the next tick, not the wait in progress.
//! 6. Repeated `play()` does not double the cadence.
//!
//! Timing assertions poll with generous margins rather than asserting exact
//! tick instants.

use std::time::{Duration, Instant};

use stepviz_playback::{Player, PlayerConfig, PlaybackSummary};
use stepviz_trace::{Snapshot, Trace};

fn trace_labeled(label: &str, n: usize) -> Trace {
    let snapshots = (0..n)
        .map(|i| Snapshot::new(i, format!("{label} {i}")))
        .collect();
    Trace::from_snapshots(snapshots).unwrap()
}

/// Poll until the summary satisfies `done`, or fail after `timeout`.
fn wait_for(player: &Player, timeout: Duration, done: impl Fn(&PlaybackSummary) -> bool) {
    let start = Instant::now();
    loop {
        let summary = player.summary();
        if done(&summary) {
            return;
        }
        assert!(
            start.elapsed() < timeout,
            "condition not reached within {timeout:?}, last summary: {summary:?}"
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn auto_stop_on_a_three_step_trace() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(10)));
    player.load_trace(trace_labeled("a", 3));
    player.play();

    wait_for(&player, Duration::from_secs(5), |s| {
        !s.playing && s.current_step == 2
    });

    // no further step after auto-stop
    std::thread::sleep(Duration::from_millis(60));
    let summary = player.summary();
    assert_eq!(summary.current_step, 2);
    assert!(!summary.playing);
}

#[test]
fn five_snapshot_trace_plays_end_to_end() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(10)));
    player.load_trace(trace_labeled("demo", 5));
    player.play();
    assert!(player.summary().playing);

    wait_for(&player, Duration::from_secs(5), |s| {
        !s.playing && s.current_step == 4
    });
    assert_eq!(player.snapshot().message, "demo 4");
}

#[test]
fn playing_a_single_snapshot_trace_stops_without_stepping() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(10)));
    player.load_trace(trace_labeled("solo", 1));
    player.play();
    wait_for(&player, Duration::from_secs(5), |s| !s.playing);
    assert_eq!(player.summary().current_step, 0);
}

#[test]
fn pause_cancels_the_pending_wait() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(500)));
    player.load_trace(trace_labeled("slow", 10));
    player.play();
    player.pause();

    // the 500ms tick that was in flight must not land
    std::thread::sleep(Duration::from_millis(700));
    let summary = player.summary();
    assert_eq!(summary.current_step, 0);
    assert!(!summary.playing);
}

#[test]
fn reset_during_playback_rewinds_and_stops() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(10)));
    player.load_trace(trace_labeled("r", 50));
    player.play();
    wait_for(&player, Duration::from_secs(5), |s| s.current_step >= 3);
    player.reset();

    let summary = player.summary();
    assert!(!summary.playing);
    assert_eq!(summary.current_step, 0);

    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(player.summary().current_step, 0, "ticker kept running after reset");
}

#[test]
fn loading_mid_playback_replaces_atomically() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(10)));
    player.load_trace(trace_labeled("old", 50));
    player.play();
    wait_for(&player, Duration::from_secs(5), |s| s.current_step >= 2);

    player.load_trace(trace_labeled("new", 4));
    let summary = player.summary();
    assert_eq!(summary.current_step, 0);
    assert!(!summary.playing);
    assert_eq!(summary.trace_len, 4);
    // the visible snapshot is from the new trace, never a mix
    assert_eq!(player.snapshot().message, "new 0");

    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(player.summary().current_step, 0, "old ticker leaked into new trace");
}

#[test]
fn speed_change_applies_to_the_next_tick() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(400)));
    player.load_trace(trace_labeled("s", 30));
    player.play();

    // shrink the cadence while the first 400ms wait is in flight
    std::thread::sleep(Duration::from_millis(50));
    player.set_speed(Duration::from_millis(10)).unwrap();

    // the in-flight wait keeps its old delay: well before 400ms no step yet
    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(
        player.summary().current_step,
        0,
        "speed change shortened the wait already in progress"
    );

    // once the old wait lands, the new cadence kicks in
    wait_for(&player, Duration::from_secs(5), |s| s.current_step >= 5);
}

#[test]
fn repeated_play_keeps_a_single_cadence() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(100)));
    player.load_trace(trace_labeled("p", 30));
    player.play();
    player.play();
    player.play();

    std::thread::sleep(Duration::from_millis(250));
    let stepped = player.summary().current_step;
    assert!(
        (1..=3).contains(&stepped),
        "expected ~2 steps from a single ticker, got {stepped}"
    );
}

#[test]
fn play_after_auto_stop_requires_reset_to_replay() {
    let player = Player::with_config(PlayerConfig::default().with_speed(Duration::from_millis(10)));
    player.load_trace(trace_labeled("again", 3));
    player.play();
    wait_for(&player, Duration::from_secs(5), |s| !s.playing);

    // playing again at the end auto-stops without moving
    player.play();
    wait_for(&player, Duration::from_secs(5), |s| !s.playing);
    assert_eq!(player.summary().current_step, 2);

    // after reset the trace replays in full
    player.reset();
    player.play();
    wait_for(&player, Duration::from_secs(5), |s| {
        !s.playing && s.current_step == 2
    });
}
