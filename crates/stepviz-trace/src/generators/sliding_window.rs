#![forbid(unsafe_code)]

//! Sliding window: fixed-width window advanced one cell at a time.

use crate::snapshot::Snapshot;

/// Trace the maximum-average walk: seed the first window, then slide it to
/// the end, dropping the leaving element and adding the entering one.
pub fn max_average(nums: &[i64], k: usize) -> Vec<Snapshot> {
    if k == 0 || nums.len() < k {
        return vec![Snapshot::new(
            0,
            format!("Window of {k} does not fit {} elements", nums.len()),
        )];
    }

    let mut sum: i64 = nums[..k].iter().sum();
    let mut best = sum;
    let mut steps = vec![
        Snapshot::new(0, format!("Initialized window with first {k} elements, sum={sum}"))
            .with_pointer("left", 0)
            .with_pointer("right", k - 1)
            .with_highlights(0..k)
            .with_value("nums", nums)
            .with_value("sum", sum)
            .with_value("avg", sum as f64 / k as f64),
    ];

    for i in k..nums.len() {
        sum = sum - nums[i - k] + nums[i];
        best = best.max(sum);
        let left = i - k + 1;
        steps.push(
            Snapshot::new(
                steps.len(),
                format!("Slid window: removed {}, added {}, sum={sum}", nums[i - k], nums[i]),
            )
            .with_pointer("left", left)
            .with_pointer("right", i)
            .with_highlights(left..=i)
            .with_value("sum", sum)
            .with_value("avg", sum as f64 / k as f64),
        );
    }

    steps.push(
        Snapshot::new(steps.len(), format!("Best average: {:.2}", best as f64 / k as f64))
            .with_value("best_sum", best)
            .with_value("best_avg", best as f64 / k as f64),
    );
    steps
}
