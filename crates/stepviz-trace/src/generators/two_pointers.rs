#![forbid(unsafe_code)]

//! Two pointers: walk inward from both ends of a sorted array.

use crate::snapshot::Snapshot;

/// Trace the sorted two-sum walk: move `left` up when the pair sum is too
/// small, `right` down when it is too large.
pub fn two_sum_sorted(numbers: &[i64], target: i64) -> Vec<Snapshot> {
    if numbers.len() < 2 {
        return vec![Snapshot::new(0, "Need at least two numbers to form a pair")];
    }

    let mut left = 0usize;
    let mut right = numbers.len() - 1;
    let mut steps = vec![
        Snapshot::new(0, format!("Starting: left={left}, right={right}"))
            .with_pointer("left", left)
            .with_pointer("right", right)
            .with_highlights([left, right])
            .with_value("numbers", numbers)
            .with_value("target", target),
    ];

    let mut found = false;
    while left < right {
        let sum = numbers[left] + numbers[right];
        let message = if sum == target {
            found = true;
            format!("Found pair: {} + {} = {target}", numbers[left], numbers[right])
        } else if sum < target {
            format!("Sum {sum} < target {target}, moving left inward")
        } else {
            format!("Sum {sum} > target {target}, moving right inward")
        };
        steps.push(
            Snapshot::new(steps.len(), message)
                .with_pointer("left", left)
                .with_pointer("right", right)
                .with_highlights([left, right])
                .with_value("sum", sum)
                .with_value("target", target),
        );
        if found {
            break;
        }
        if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }

    if !found {
        steps.push(
            Snapshot::new(steps.len(), format!("No pair sums to {target}"))
                .with_value("target", target),
        );
    }
    steps
}
