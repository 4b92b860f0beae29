#![forbid(unsafe_code)]

//! Binary search: halve a sorted range until the target is cornered.

use crate::snapshot::Snapshot;

/// Trace the classic halving search. Each comparison snapshot highlights the
/// still-active range and carries the `left`/`right`/`mid` cursors.
pub fn search(numbers: &[i64], target: i64) -> Vec<Snapshot> {
    if numbers.is_empty() {
        return vec![Snapshot::new(
            0,
            format!("Array is empty, {target} cannot be present"),
        )];
    }

    let mut left = 0usize;
    let mut right = numbers.len() - 1;
    let mut steps = vec![
        Snapshot::new(
            0,
            format!("Searching for {target} among {} sorted values", numbers.len()),
        )
        .with_pointer("left", left)
        .with_pointer("right", right)
        .with_highlights(left..=right)
        .with_value("numbers", numbers)
        .with_value("target", target),
    ];

    let mut found = false;
    while left <= right {
        let mid = left + (right - left) / 2;
        if numbers[mid] == target {
            steps.push(
                Snapshot::new(steps.len(), format!("Found {target} at index {mid}"))
                    .with_pointer("left", left)
                    .with_pointer("right", right)
                    .with_pointer("mid", mid)
                    .with_highlights([mid]),
            );
            found = true;
            break;
        }
        if numbers[mid] < target {
            steps.push(
                Snapshot::new(
                    steps.len(),
                    format!("numbers[{mid}]={} < {target}, searching right half", numbers[mid]),
                )
                .with_pointer("left", left)
                .with_pointer("right", right)
                .with_pointer("mid", mid)
                .with_highlights(left..=right),
            );
            left = mid + 1;
        } else {
            steps.push(
                Snapshot::new(
                    steps.len(),
                    format!("numbers[{mid}]={} > {target}, searching left half", numbers[mid]),
                )
                .with_pointer("left", left)
                .with_pointer("right", right)
                .with_pointer("mid", mid)
                .with_highlights(left..=right),
            );
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }
    }

    if !found {
        steps.push(
            Snapshot::new(steps.len(), format!("{target} is not present"))
                .with_value("target", target),
        );
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;

    #[test]
    fn finds_the_example_target() {
        let steps = search(&[-1, 0, 3, 5, 9, 12], 9);
        let last = steps.last().unwrap();
        assert_eq!(last.message, "Found 9 at index 4");
        assert_eq!(last.pointer("mid"), Some(4));
        assert!(Trace::from_snapshots(steps).is_ok());
    }

    #[test]
    fn reports_missing_target() {
        let steps = search(&[-1, 0, 3, 5, 9, 12], 2);
        assert_eq!(steps.last().unwrap().message, "2 is not present");
        assert!(Trace::from_snapshots(steps).is_ok());
    }

    #[test]
    fn target_below_all_values_terminates() {
        // Exercises the mid == 0 underflow guard.
        let steps = search(&[10, 20, 30], 1);
        assert_eq!(steps.last().unwrap().message, "1 is not present");
    }

    #[test]
    fn empty_array_is_degenerate() {
        assert_eq!(search(&[], 4).len(), 1);
    }

    #[test]
    fn single_element_hit() {
        let steps = search(&[5], 5);
        assert_eq!(steps.last().unwrap().message, "Found 5 at index 0");
    }
}
