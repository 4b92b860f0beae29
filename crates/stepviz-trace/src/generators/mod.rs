#![forbid(unsafe_code)]

//! Trace generators: pure, deterministic snapshot producers.
//!
//! One module per pattern family. Every generator obeys the same contract:
//!
//! 1. **Pure and deterministic** - same input, identical snapshot sequence.
//! 2. **Never empty** - at least one snapshot even for degenerate input.
//! 3. **Contiguous** - snapshot indices always form `0..N-1` (each generator
//!    assigns `steps.len()` as the next index).
//!
//! [`generate`] dispatches a [`Problem`] to its family's generator. A
//! mismatched pattern/input pairing yields a one-snapshot explanatory trace
//! rather than an error; the playback engine treats it like any other trace.

pub mod backtracking;
pub mod bfs;
pub mod binary_search;
pub mod dfs;
pub mod dp;
pub mod fast_slow;
pub mod sliding_window;
pub mod two_pointers;

use crate::problem::{ExampleInput, Pattern, Problem};
use crate::snapshot::Snapshot;

/// Produce the snapshot sequence for one problem's fixed example input.
pub fn generate(problem: &Problem) -> Vec<Snapshot> {
    match (problem.pattern, problem.example) {
        (Pattern::TwoPointers, ExampleInput::TargetSearch { numbers, target }) => {
            two_pointers::two_sum_sorted(numbers, target)
        }
        (Pattern::SlidingWindow, ExampleInput::Window { nums, k }) => {
            sliding_window::max_average(nums, k)
        }
        (Pattern::FastSlow, ExampleInput::Links { next, start }) => {
            fast_slow::detect_cycle(next, start)
        }
        (Pattern::BinarySearch, ExampleInput::TargetSearch { numbers, target }) => {
            binary_search::search(numbers, target)
        }
        (Pattern::Bfs, ExampleInput::Tree { nodes }) => bfs::level_order(nodes),
        (Pattern::Dfs, ExampleInput::Tree { nodes }) => dfs::preorder(nodes),
        (Pattern::Backtracking, ExampleInput::Choices { nums }) => {
            backtracking::permutations(nums)
        }
        (Pattern::DynamicProgramming, ExampleInput::Count { n }) => dp::climb_stairs(n),
        _ => vec![Snapshot::new(
            0,
            format!("No visualization available for {}", problem.id),
        )],
    }
}
