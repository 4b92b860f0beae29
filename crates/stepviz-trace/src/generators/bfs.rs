#![forbid(unsafe_code)]

//! BFS: level-order traversal over a heap-indexed binary tree.

use std::collections::VecDeque;

use crate::snapshot::{Snapshot, Value};

/// Trace a queue-driven level-order walk. Children of node `i` live at
/// `2i+1` and `2i+2`; `None` marks an absent child.
pub fn level_order(nodes: &[Option<i64>]) -> Vec<Snapshot> {
    let Some(root) = nodes.first().copied().flatten() else {
        return vec![Snapshot::new(0, "Tree is empty")];
    };

    let mut steps = vec![
        Snapshot::new(0, format!("Enqueued root {root}"))
            .with_pointer("current", 0)
            .with_highlights([0]),
    ];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut visited: Vec<usize> = Vec::new();
    let mut order: Vec<i64> = Vec::new();
    let mut level = 0usize;

    while !queue.is_empty() {
        let width = queue.len();
        let mut level_values: Vec<i64> = Vec::new();
        for _ in 0..width {
            let Some(i) = queue.pop_front() else { break };
            let Some(value) = nodes.get(i).copied().flatten() else {
                continue;
            };
            visited.push(i);
            order.push(value);
            level_values.push(value);
            for child in [2 * i + 1, 2 * i + 2] {
                if nodes.get(child).copied().flatten().is_some() {
                    queue.push_back(child);
                }
            }
            steps.push(
                Snapshot::new(steps.len(), format!("Visited {value} at level {level}"))
                    .with_pointer("current", i)
                    .with_highlights(visited.clone())
                    .with_value("order", order.clone())
                    .with_value("level", level),
            );
        }
        steps.push(
            Snapshot::new(
                steps.len(),
                format!("Level {level} complete: {}", Value::IntList(level_values.clone())),
            )
            .with_highlights(visited.clone())
            .with_value("level_values", Value::IntList(level_values)),
        );
        level += 1;
    }

    steps.push(
        Snapshot::new(steps.len(), format!("Traversal complete across {level} levels"))
            .with_value("order", order),
    );
    steps
}
