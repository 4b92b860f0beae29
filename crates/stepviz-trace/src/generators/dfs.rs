#![forbid(unsafe_code)]

//! DFS: preorder traversal with an explicit stack.

use crate::snapshot::{Snapshot, Value};

/// Trace a stack-driven preorder walk over a heap-indexed binary tree. The
/// right child is pushed first so the left subtree is explored before it.
pub fn preorder(nodes: &[Option<i64>]) -> Vec<Snapshot> {
    if nodes.first().copied().flatten().is_none() {
        return vec![Snapshot::new(0, "Tree is empty")];
    }

    let mut steps = vec![
        Snapshot::new(0, "Pushed root onto the stack")
            .with_pointer("current", 0)
            .with_highlights([0]),
    ];
    let mut stack: Vec<usize> = vec![0];
    let mut visited: Vec<usize> = Vec::new();
    let mut order: Vec<i64> = Vec::new();

    while let Some(i) = stack.pop() {
        let Some(value) = nodes.get(i).copied().flatten() else {
            continue;
        };
        visited.push(i);
        order.push(value);
        let right = 2 * i + 2;
        let left = 2 * i + 1;
        if nodes.get(right).copied().flatten().is_some() {
            stack.push(right);
        }
        if nodes.get(left).copied().flatten().is_some() {
            stack.push(left);
        }
        steps.push(
            Snapshot::new(
                steps.len(),
                format!("Visited {value}, stack depth {}", stack.len()),
            )
            .with_pointer("current", i)
            .with_highlights(visited.clone())
            .with_value("order", order.clone()),
        );
    }

    steps.push(Snapshot::new(
        steps.len(),
        format!("Preorder complete: {}", Value::IntList(order)),
    ));
    steps
}
