#![forbid(unsafe_code)]

//! stepviz playback engine.
//!
//! Converts a trace - an ordered sequence of execution snapshots - into
//! time-based playback: play, pause, single-step, reset, variable speed.
//!
//! # Key Components
//!
//! - [`PlaybackState`] - the authoritative record of position, play flag,
//!   and speed.
//! - [`Command`] / [`PlaybackState::apply`] - the pure reducer; no I/O, no
//!   timers, total over the legal state space.
//! - [`select`] - pure read-only derivations consumed by renderers.
//! - [`Player`] - the serialized state owner: command API, query API, change
//!   observation, and the auto-play ticker lifecycle.
//!
//! # How it fits in the system
//! `stepviz-trace` produces traces; this crate owns all state-transition
//! logic and the only real concurrency (the ticker thread racing user
//! input); renderers subscribe through [`Player::observe`] and read, never
//! write.

pub mod command;
pub mod player;
pub mod select;
pub mod state;
mod ticker;

pub use command::{Command, CommandError};
pub use player::{ObserverGuard, Player, PlayerConfig, trace_for};
pub use select::{PlaybackSummary, current_snapshot, is_at_end, progress, summarize};
pub use state::{DEFAULT_SPEED, PlaybackState};
