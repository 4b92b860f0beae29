#![forbid(unsafe_code)]

//! Trace: an ordered, finite, immutable sequence of snapshots.
//!
//! A trace is produced once per problem selection and replaces any prior
//! trace wholesale; it is never mutated in place. Internally the snapshot
//! list is shared behind an `Arc`, so cloning a trace is cheap and observers
//! can use [`Trace::ptr_eq`] to skip redundant work when the trace has not
//! changed.
//!
//! # Invariants
//!
//! 1. A trace is never empty. The degenerate "nothing loaded" case is the
//!    single-snapshot [`Trace::placeholder`].
//! 2. Snapshot `index` values form the contiguous range `0..N-1`, validated
//!    by [`Trace::from_snapshots`].
//!
//! # Failure Modes
//!
//! - Empty snapshot list: rejected with [`TraceError::Empty`].
//! - Out-of-order or gapped indices: rejected with
//!   [`TraceError::IndexMismatch`] naming the first offending position.

use std::fmt;
use std::sync::Arc;

use crate::snapshot::Snapshot;

/// Validation failure for a snapshot list offered to [`Trace::from_snapshots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The generator produced zero snapshots.
    Empty,
    /// A snapshot's `index` does not match its position in the list.
    IndexMismatch { position: usize, found: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "trace has no snapshots"),
            Self::IndexMismatch { position, found } => {
                write!(f, "snapshot at position {position} carries index {found}")
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// The full ordered list of snapshots for one algorithm run.
#[derive(Debug, Clone)]
pub struct Trace {
    snapshots: Arc<[Snapshot]>,
}

impl Trace {
    /// Build a trace from a generator's output, validating the index
    /// invariant.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Result<Self, TraceError> {
        if snapshots.is_empty() {
            return Err(TraceError::Empty);
        }
        for (position, snapshot) in snapshots.iter().enumerate() {
            if snapshot.index != position {
                return Err(TraceError::IndexMismatch {
                    position,
                    found: snapshot.index,
                });
            }
        }
        Ok(Self {
            snapshots: snapshots.into(),
        })
    }

    /// The well-defined single-snapshot fallback trace.
    ///
    /// Used before anything is loaded and whenever a generator fails, so
    /// playback controls stay inert instead of crashing.
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            snapshots: vec![Snapshot::new(0, message)].into(),
        }
    }

    /// Number of snapshots. Always at least 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; present for iterator-adjacent API symmetry.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the final snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The first snapshot. Total: traces are never empty.
    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// `true` if both handles share the same underlying snapshot storage.
    ///
    /// Lets observers skip recomputation when a state change did not replace
    /// the trace.
    pub fn ptr_eq(&self, other: &Trace) -> bool {
        Arc::ptr_eq(&self.snapshots, &other.snapshots)
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::placeholder("No trace loaded")
    }
}

impl PartialEq for Trace {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.snapshots == other.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: usize) -> Vec<Snapshot> {
        (0..n).map(|i| Snapshot::new(i, format!("step {i}"))).collect()
    }

    #[test]
    fn from_snapshots_accepts_contiguous() {
        let trace = Trace::from_snapshots(steps(4)).unwrap();
        assert_eq!(trace.len(), 4);
        assert_eq!(trace.last_index(), 3);
        assert_eq!(trace.get(2).unwrap().message, "step 2");
    }

    #[test]
    fn from_snapshots_rejects_empty() {
        assert_eq!(Trace::from_snapshots(Vec::new()), Err(TraceError::Empty));
    }

    #[test]
    fn from_snapshots_rejects_gap() {
        let mut snapshots = steps(3);
        snapshots[2].index = 5;
        assert_eq!(
            Trace::from_snapshots(snapshots),
            Err(TraceError::IndexMismatch {
                position: 2,
                found: 5
            })
        );
    }

    #[test]
    fn from_snapshots_rejects_duplicate_index() {
        let mut snapshots = steps(3);
        snapshots[1].index = 0;
        assert!(Trace::from_snapshots(snapshots).is_err());
    }

    #[test]
    fn placeholder_is_single_inert_snapshot() {
        let trace = Trace::placeholder("No trace loaded");
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last_index(), 0);
        assert_eq!(trace.first().message, "No trace loaded");
        assert!(trace.first().pointers.is_empty());
    }

    #[test]
    fn clone_shares_storage() {
        let a = Trace::from_snapshots(steps(2)).unwrap();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        let c = Trace::from_snapshots(steps(2)).unwrap();
        assert!(!a.ptr_eq(&c));
        assert_eq!(a, c);
    }
}
