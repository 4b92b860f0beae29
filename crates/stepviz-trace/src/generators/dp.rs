#![forbid(unsafe_code)]

//! Dynamic programming: bottom-up table fill.

use crate::snapshot::Snapshot;

/// Trace the climbing-stairs recurrence `dp[i] = dp[i-1] + dp[i-2]`, one
/// table cell per snapshot.
pub fn climb_stairs(n: usize) -> Vec<Snapshot> {
    let mut steps = vec![Snapshot::new(0, format!("Counting ways to climb {n} stairs"))];
    if n <= 1 {
        steps.push(
            Snapshot::new(1, "Base case: one way")
                .with_value("ways", 1i64),
        );
        return steps;
    }

    let mut table = vec![0i64; n + 1];
    table[0] = 1;
    table[1] = 1;
    steps.push(
        Snapshot::new(1, "Base cases: dp[0]=1, dp[1]=1")
            .with_highlights([0, 1])
            .with_value("table", table[..2].to_vec()),
    );

    for i in 2..=n {
        table[i] = table[i - 1] + table[i - 2];
        steps.push(
            Snapshot::new(
                steps.len(),
                format!("dp[{i}] = dp[{}] + dp[{}] = {}", i - 1, i - 2, table[i]),
            )
            .with_pointer("i", i)
            .with_highlights([i - 2, i - 1, i])
            .with_value("table", table[..=i].to_vec()),
        );
    }

    steps.push(
        Snapshot::new(
            steps.len(),
            format!("{} ways to climb {n} stairs", table[n]),
        )
        .with_value("ways", table[n]),
    );
    steps
}
