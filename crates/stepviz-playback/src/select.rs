#![forbid(unsafe_code)]

//! Selectors: pure read-only derivations over [`PlaybackState`].
//!
//! Referential stability comes from the trace's shared storage rather than a
//! memo cache: the snapshot slice lives behind an `Arc`, so as long as the
//! trace is unchanged ([`Trace::ptr_eq`](stepviz_trace::Trace::ptr_eq)),
//! `current_snapshot` borrows the same allocation and observers can skip
//! redundant work.

use std::time::Duration;

use stepviz_trace::Snapshot;

use crate::state::PlaybackState;

/// The snapshot at the current step. Total: traces are never empty.
pub fn current_snapshot(state: &PlaybackState) -> &Snapshot {
    match state.trace().get(state.current_step()) {
        Some(snapshot) => snapshot,
        // unreachable while the reducer's clamp invariant holds
        None => state.trace().first(),
    }
}

/// Whether the current step is the final snapshot.
pub fn is_at_end(state: &PlaybackState) -> bool {
    state.current_step() == state.trace().last_index()
}

/// Playback position as a fraction in `[0.0, 1.0]`. A single-snapshot trace
/// is always complete.
pub fn progress(state: &PlaybackState) -> f64 {
    let last = state.trace().last_index();
    if last == 0 {
        1.0
    } else {
        state.current_step() as f64 / last as f64
    }
}

/// Read-only summary of the playback record, for the query surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub current_step: usize,
    pub playing: bool,
    pub speed: Duration,
    pub trace_len: usize,
}

/// Summarize the state without exposing the trace payload.
pub fn summarize(state: &PlaybackState) -> PlaybackSummary {
    PlaybackSummary {
        current_step: state.current_step(),
        playing: state.is_playing(),
        speed: state.speed(),
        trace_len: state.trace().len(),
    }
}
