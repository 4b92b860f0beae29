#![forbid(unsafe_code)]

//! Snapshot and trace data model for stepviz.
//!
//! This crate owns everything that exists *before* playback starts:
//!
//! - [`Snapshot`] - one recorded state of an algorithm's execution, shown as
//!   one animation frame.
//! - [`Trace`] - the full ordered, immutable list of snapshots for one
//!   algorithm run. Validated on construction: a trace is never empty and its
//!   snapshot indices always form the contiguous range `0..N-1`.
//! - [`Problem`] and [`catalog`] - the static problem set, one representative
//!   problem per algorithm pattern.
//! - [`generators`] - the pure, deterministic trace producers. Same problem,
//!   identical snapshot sequence, every time.
//!
//! # Role in stepviz
//! `stepviz-trace` is the data source. The playback engine
//! (`stepviz-playback`) consumes traces but never constructs or mutates them;
//! renderers consume snapshots as read-only values.

pub mod generators;
pub mod problem;
pub mod snapshot;
pub mod trace;

pub use generators::generate;
pub use problem::{Difficulty, ExampleInput, Pattern, Problem, catalog, find};
pub use snapshot::{Snapshot, Value};
pub use trace::{Trace, TraceError};
