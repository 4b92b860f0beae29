#![forbid(unsafe_code)]

//! Backtracking: choose, explore, un-choose.

use crate::snapshot::{Snapshot, Value};

/// Trace full permutation enumeration. Each edge of the decision tree yields
/// a "Choose" snapshot on the way down and a "Backtrack" snapshot on the way
/// up; completed paths are recorded into the running result set.
pub fn permutations(nums: &[i64]) -> Vec<Snapshot> {
    if nums.is_empty() {
        return vec![Snapshot::new(0, "Nothing to permute")];
    }

    let mut steps = vec![
        Snapshot::new(0, format!("Permuting {}", Value::IntList(nums.to_vec())))
            .with_value("nums", nums),
    ];
    let mut used = vec![false; nums.len()];
    let mut path: Vec<i64> = Vec::new();
    let mut results: Vec<Vec<i64>> = Vec::new();
    explore(nums, &mut used, &mut path, &mut results, &mut steps);
    steps.push(
        Snapshot::new(
            steps.len(),
            format!("Enumerated {} permutations", results.len()),
        )
        .with_value("results", Value::ListList(results)),
    );
    steps
}

fn explore(
    nums: &[i64],
    used: &mut Vec<bool>,
    path: &mut Vec<i64>,
    results: &mut Vec<Vec<i64>>,
    steps: &mut Vec<Snapshot>,
) {
    if path.len() == nums.len() {
        results.push(path.clone());
        steps.push(
            Snapshot::new(
                steps.len(),
                format!("Found permutation {}", Value::IntList(path.clone())),
            )
            .with_highlights(chosen(used))
            .with_value("path", path.clone())
            .with_value("results", Value::ListList(results.clone())),
        );
        return;
    }
    for i in 0..nums.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        path.push(nums[i]);
        steps.push(
            Snapshot::new(steps.len(), format!("Choose {}", nums[i]))
                .with_pointer("cursor", i)
                .with_highlights(chosen(used))
                .with_value("path", path.clone()),
        );
        explore(nums, used, path, results, steps);
        path.pop();
        used[i] = false;
        steps.push(
            Snapshot::new(steps.len(), format!("Backtrack, removing {}", nums[i]))
                .with_pointer("cursor", i)
                .with_highlights(chosen(used))
                .with_value("path", path.clone()),
        );
    }
}

fn chosen(used: &[bool]) -> Vec<usize> {
    used.iter()
        .enumerate()
        .filter_map(|(i, &u)| u.then_some(i))
        .collect()
}
