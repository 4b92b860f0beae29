#![forbid(unsafe_code)]

//! The inbound command vocabulary and its rejection error.

use std::fmt;
use std::time::Duration;

use stepviz_trace::Trace;

/// A playback command. Applied to [`PlaybackState`](crate::PlaybackState) by
/// the pure reducer; submitted through [`Player`](crate::Player) at runtime.
#[derive(Debug, Clone)]
pub enum Command {
    /// Replace the loaded trace wholesale and rewind.
    LoadTrace(Trace),
    /// Advance one snapshot; clamped no-op at the end of the trace.
    Step,
    /// Begin auto-play. Idempotent.
    Play,
    /// Halt auto-play. Idempotent.
    Pause,
    /// Rewind to the first snapshot and halt auto-play.
    Reset,
    /// Change the delay between automatic advances. Must be non-zero.
    SetSpeed(Duration),
}

impl Command {
    /// Stable label for tracing and test assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadTrace(_) => "load_trace",
            Self::Step => "step",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Reset => "reset",
            Self::SetSpeed(_) => "set_speed",
        }
    }
}

/// A command rejected at the boundary. Rejected commands never mutate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `SetSpeed` with a zero duration; the tick cadence must be positive.
    InvalidSpeed { requested: Duration },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpeed { requested } => {
                write!(f, "playback speed must be non-zero, got {requested:?}")
            }
        }
    }
}

impl std::error::Error for CommandError {}
