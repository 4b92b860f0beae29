#![forbid(unsafe_code)]

//! Fast/slow pointers: Floyd's tortoise and hare over a successor list.

use crate::snapshot::{Snapshot, Value};

/// Trace cycle detection on a successor graph where `next[i]` is node `i`'s
/// follower. Every node has a successor, so the race always terminates
/// within `next.len()` rounds.
pub fn detect_cycle(next: &[usize], start: usize) -> Vec<Snapshot> {
    if start >= next.len() || next.iter().any(|&n| n >= next.len()) {
        return vec![Snapshot::new(0, "Successor list is malformed")];
    }

    let nodes: Vec<i64> = next.iter().map(|&n| n as i64).collect();
    let mut slow = start;
    let mut fast = start;
    let mut steps = vec![
        Snapshot::new(0, "Slow and fast pointers start at the head")
            .with_pointer("slow", slow)
            .with_pointer("fast", fast)
            .with_highlights([start])
            .with_value("next", Value::IntList(nodes)),
    ];

    for round in 1..=next.len() {
        slow = next[slow];
        fast = next[next[fast]];
        if slow == fast {
            steps.push(
                Snapshot::new(
                    steps.len(),
                    format!("Round {round}: pointers met at node {slow}, cycle detected"),
                )
                .with_pointer("slow", slow)
                .with_pointer("fast", fast)
                .with_highlights([slow]),
            );
            return steps;
        }
        steps.push(
            Snapshot::new(
                steps.len(),
                format!("Round {round}: slow at node {slow}, fast at node {fast}"),
            )
            .with_pointer("slow", slow)
            .with_pointer("fast", fast)
            .with_highlights([slow, fast]),
        );
    }

    steps.push(Snapshot::new(steps.len(), "Pointers never met, no cycle"));
    steps
}
