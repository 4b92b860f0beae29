#![forbid(unsafe_code)]

//! Snapshot: one point-in-time view of an algorithm's execution.
//!
//! A snapshot carries a human-readable message plus three optional payload
//! channels: named cursor positions (`pointers`), emphasized cell indices
//! (`highlights`), and derived quantities (`values`). All three may be empty;
//! renderers must not assume any particular key is present.
//!
//! Payload maps are `BTreeMap` on purpose: deterministic iteration order is
//! part of the contract, so traces render and serialize identically across
//! runs.

use std::collections::BTreeMap;
use std::fmt;

/// An algorithm-specific payload value.
///
/// Each trace generator picks the variants that fit its problem family; a
/// window generator records running sums and averages, a backtracking
/// generator records the partial path and collected results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    /// Collected result sets, e.g. the permutations found so far.
    ListList(Vec<Vec<i64>>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.2}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::IntList(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "]")
            }
            Self::TextList(xs) => write!(f, "[{}]", xs.join(",")),
            Self::ListList(xs) => {
                write!(f, "[")?;
                for (i, inner) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", Self::IntList(inner.clone()))?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<i64>> for Value {
    fn from(xs: Vec<i64>) -> Self {
        Self::IntList(xs)
    }
}

impl From<&[i64]> for Value {
    fn from(xs: &[i64]) -> Self {
        Self::IntList(xs.to_vec())
    }
}

/// One recorded state of an algorithm's execution.
///
/// # Invariants
///
/// 1. Within one trace, `index` values are unique and contiguous from 0
///    (enforced by [`Trace::from_snapshots`](crate::trace::Trace::from_snapshots)).
/// 2. Snapshots are immutable once handed to a trace; renderers receive them
///    as read-only values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Position within the owning trace, 0-based.
    pub index: usize,
    /// Human-readable description of what changed at this step.
    pub message: String,
    /// Named cursor positions ("left", "right", "mid", "slow", "fast").
    pub pointers: BTreeMap<String, usize>,
    /// Cell indices currently emphasized, in display order.
    pub highlights: Vec<usize>,
    /// Auxiliary derived quantities (running sum, window average, results).
    pub values: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Create a snapshot with empty payload channels.
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
            pointers: BTreeMap::new(),
            highlights: Vec::new(),
            values: BTreeMap::new(),
        }
    }

    /// Record a named cursor position (builder pattern).
    #[must_use]
    pub fn with_pointer(mut self, name: &str, position: usize) -> Self {
        self.pointers.insert(name.to_string(), position);
        self
    }

    /// Replace the highlight list (builder pattern).
    #[must_use]
    pub fn with_highlights<I: IntoIterator<Item = usize>>(mut self, cells: I) -> Self {
        self.highlights = cells.into_iter().collect();
        self
    }

    /// Record a named payload value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Look up a cursor position by name.
    pub fn pointer(&self, name: &str) -> Option<usize> {
        self.pointers.get(name).copied()
    }

    /// Look up a payload value by name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_all_channels() {
        let snap = Snapshot::new(3, "comparing ends")
            .with_pointer("left", 0)
            .with_pointer("right", 4)
            .with_highlights([0, 4])
            .with_value("sum", 9i64)
            .with_value("numbers", vec![2i64, 7, 11, 15]);

        assert_eq!(snap.index, 3);
        assert_eq!(snap.pointer("left"), Some(0));
        assert_eq!(snap.pointer("right"), Some(4));
        assert_eq!(snap.pointer("mid"), None);
        assert_eq!(snap.highlights, vec![0, 4]);
        assert_eq!(snap.value("sum"), Some(&Value::Int(9)));
        assert_eq!(
            snap.value("numbers"),
            Some(&Value::IntList(vec![2, 7, 11, 15]))
        );
    }

    #[test]
    fn empty_channels_by_default() {
        let snap = Snapshot::new(0, "start");
        assert!(snap.pointers.is_empty());
        assert!(snap.highlights.is_empty());
        assert!(snap.values.is_empty());
    }

    #[test]
    fn pointer_iteration_is_sorted_by_name() {
        let snap = Snapshot::new(0, "x")
            .with_pointer("right", 9)
            .with_pointer("left", 1)
            .with_pointer("mid", 5);
        let names: Vec<&str> = snap.pointers.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["left", "mid", "right"]);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(2.5).to_string(), "2.50");
        assert_eq!(Value::Text("hi".into()).to_string(), "hi");
        assert_eq!(Value::IntList(vec![1, 2, 3]).to_string(), "[1,2,3]");
        assert_eq!(
            Value::ListList(vec![vec![1, 2], vec![2, 1]]).to_string(),
            "[[1,2],[2,1]]"
        );
    }

    #[test]
    fn with_highlights_replaces_previous() {
        let snap = Snapshot::new(0, "x")
            .with_highlights([1, 2, 3])
            .with_highlights([4]);
        assert_eq!(snap.highlights, vec![4]);
    }
}
