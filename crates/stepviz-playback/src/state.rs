#![forbid(unsafe_code)]

//! Playback state and the pure command reducer.
//!
//! [`PlaybackState::apply`] is the core state transition function: given the
//! current state and a [`Command`], it returns the next state (or a rejection
//! that leaves the caller's state untouched). It performs no I/O, knows
//! nothing about wall-clock time, and never mutates in place - readers can
//! hold the old state while the owner installs the new one.
//!
//! # Invariants
//!
//! 1. `current_step <= trace.last_index()` after every transition.
//! 2. `speed` is non-zero after every transition.
//! 3. The trace is never empty (guaranteed by [`Trace`]'s constructors).
//! 4. A rejected command yields `Err` and no partial update.

use std::time::Duration;

use stepviz_trace::Trace;

use crate::command::{Command, CommandError};

/// Default delay between automatic advances.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(1000);

/// The authoritative playback record: which trace is loaded, which snapshot
/// is current, whether auto-play is active, and at what cadence.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    trace: Trace,
    current_step: usize,
    playing: bool,
    speed: Duration,
}

impl PlaybackState {
    /// Fresh state: placeholder trace, rewound, paused, default speed.
    pub fn new() -> Self {
        Self {
            trace: Trace::default(),
            current_step: 0,
            playing: false,
            speed: DEFAULT_SPEED,
        }
    }

    /// Fresh state with a trace already loaded.
    pub fn with_trace(trace: Trace) -> Self {
        Self {
            trace,
            ..Self::new()
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Apply one command, returning the next state.
    ///
    /// Total over the legal state space: every accepted command yields a
    /// state satisfying the module invariants, and every rejected command
    /// yields an error without touching `self`.
    pub fn apply(&self, command: Command) -> Result<PlaybackState, CommandError> {
        match command {
            Command::LoadTrace(trace) => Ok(Self {
                trace,
                current_step: 0,
                playing: false,
                speed: self.speed,
            }),
            Command::Step => Ok(Self {
                current_step: (self.current_step + 1).min(self.trace.last_index()),
                ..self.clone()
            }),
            Command::Play => Ok(Self {
                playing: true,
                ..self.clone()
            }),
            Command::Pause => Ok(Self {
                playing: false,
                ..self.clone()
            }),
            Command::Reset => Ok(Self {
                current_step: 0,
                playing: false,
                ..self.clone()
            }),
            Command::SetSpeed(speed) => {
                if speed.is_zero() {
                    Err(CommandError::InvalidSpeed { requested: speed })
                } else {
                    Ok(Self {
                        speed,
                        ..self.clone()
                    })
                }
            }
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_trace::Snapshot;

    fn trace(n: usize) -> Trace {
        let snapshots = (0..n).map(|i| Snapshot::new(i, format!("step {i}"))).collect();
        Trace::from_snapshots(snapshots).unwrap()
    }

    #[test]
    fn fresh_state_is_inert() {
        let state = PlaybackState::new();
        assert_eq!(state.current_step(), 0);
        assert!(!state.is_playing());
        assert_eq!(state.speed(), DEFAULT_SPEED);
        assert_eq!(state.trace().len(), 1);
    }

    #[test]
    fn load_trace_rewinds_and_pauses() {
        let state = PlaybackState::with_trace(trace(5));
        let mid = state
            .apply(Command::Step)
            .unwrap()
            .apply(Command::Play)
            .unwrap();
        let loaded = mid.apply(Command::LoadTrace(trace(3))).unwrap();
        assert_eq!(loaded.current_step(), 0);
        assert!(!loaded.is_playing());
        assert_eq!(loaded.trace().len(), 3);
    }

    #[test]
    fn load_trace_keeps_speed() {
        let state = PlaybackState::new()
            .apply(Command::SetSpeed(Duration::from_millis(50)))
            .unwrap()
            .apply(Command::LoadTrace(trace(2)))
            .unwrap();
        assert_eq!(state.speed(), Duration::from_millis(50));
    }

    #[test]
    fn step_clamps_at_the_end() {
        let mut state = PlaybackState::with_trace(trace(3));
        for _ in 0..10 {
            state = state.apply(Command::Step).unwrap();
        }
        assert_eq!(state.current_step(), 2);
    }

    #[test]
    fn step_on_placeholder_trace_is_a_no_op() {
        let state = PlaybackState::new().apply(Command::Step).unwrap();
        assert_eq!(state.current_step(), 0);
    }

    #[test]
    fn play_and_pause_are_idempotent() {
        let state = PlaybackState::with_trace(trace(2));
        let once = state.apply(Command::Play).unwrap();
        let twice = once.apply(Command::Play).unwrap();
        assert_eq!(once, twice);

        let paused_once = twice.apply(Command::Pause).unwrap();
        let paused_twice = paused_once.apply(Command::Pause).unwrap();
        assert_eq!(paused_once, paused_twice);
    }

    #[test]
    fn reset_rewinds_but_preserves_trace_and_speed() {
        let state = PlaybackState::with_trace(trace(4))
            .apply(Command::SetSpeed(Duration::from_millis(10)))
            .unwrap()
            .apply(Command::Step)
            .unwrap()
            .apply(Command::Play)
            .unwrap();
        let reset = state.apply(Command::Reset).unwrap();
        assert_eq!(reset.current_step(), 0);
        assert!(!reset.is_playing());
        assert!(reset.trace().ptr_eq(state.trace()));
        assert_eq!(reset.speed(), Duration::from_millis(10));
    }

    #[test]
    fn zero_speed_is_rejected_without_mutation() {
        let state = PlaybackState::with_trace(trace(2));
        let err = state.apply(Command::SetSpeed(Duration::ZERO)).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidSpeed {
                requested: Duration::ZERO
            }
        );
        // the original state is still intact and usable
        assert_eq!(state.speed(), DEFAULT_SPEED);
    }

    #[test]
    fn set_speed_accepts_positive_values() {
        let state = PlaybackState::new()
            .apply(Command::SetSpeed(Duration::from_millis(1)))
            .unwrap();
        assert_eq!(state.speed(), Duration::from_millis(1));
    }
}
