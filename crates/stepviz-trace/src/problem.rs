#![forbid(unsafe_code)]

//! Static problem catalog: one representative problem per algorithm pattern.
//!
//! Problems are immutable configuration. Each carries the fixed example input
//! its trace generator runs on, as a tagged [`ExampleInput`] so every
//! generator's input is locally type-checkable without coupling all patterns
//! to one rigid schema.

use std::fmt;

/// The eight canonical algorithm patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    TwoPointers,
    SlidingWindow,
    FastSlow,
    BinarySearch,
    Bfs,
    Dfs,
    Backtracking,
    DynamicProgramming,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::TwoPointers,
        Pattern::SlidingWindow,
        Pattern::FastSlow,
        Pattern::BinarySearch,
        Pattern::Bfs,
        Pattern::Dfs,
        Pattern::Backtracking,
        Pattern::DynamicProgramming,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPointers => "Two Pointers",
            Self::SlidingWindow => "Sliding Window",
            Self::FastSlow => "Fast & Slow Pointers",
            Self::BinarySearch => "Binary Search",
            Self::Bfs => "BFS (Level Order)",
            Self::Dfs => "DFS Traversal",
            Self::Backtracking => "Backtracking",
            Self::DynamicProgramming => "Dynamic Programming",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => f.write_str("easy"),
            Self::Medium => f.write_str("medium"),
            Self::Hard => f.write_str("hard"),
        }
    }
}

/// Fixed example input for one problem, tagged per pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleInput {
    /// Sorted array plus target sum or search key.
    TargetSearch {
        numbers: &'static [i64],
        target: i64,
    },
    /// Array plus window width.
    Window { nums: &'static [i64], k: usize },
    /// Successor graph for pointer chasing: `next[i]` is node `i`'s follower.
    Links { next: &'static [usize], start: usize },
    /// Heap-indexed binary tree; `None` marks an absent child.
    Tree { nodes: &'static [Option<i64>] },
    /// Candidate elements for combinatorial search.
    Choices { nums: &'static [i64] },
    /// A single size parameter.
    Count { n: usize },
}

/// One visualizable problem: metadata plus its fixed example input.
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: Pattern,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub example: ExampleInput,
}

const CATALOG: &[Problem] = &[
    Problem {
        id: "two-sum-sorted",
        name: "Two Sum II (Sorted Array)",
        pattern: Pattern::TwoPointers,
        difficulty: Difficulty::Medium,
        description: "Find two numbers that add up to a target in a sorted array",
        example: ExampleInput::TargetSearch {
            numbers: &[2, 7, 11, 15],
            target: 9,
        },
    },
    Problem {
        id: "max-average-window",
        name: "Maximum Average Subarray",
        pattern: Pattern::SlidingWindow,
        difficulty: Difficulty::Easy,
        description: "Find the contiguous window of length k with the highest average",
        example: ExampleInput::Window {
            nums: &[1, 12, -5, -6, 50, 3],
            k: 4,
        },
    },
    Problem {
        id: "linked-list-cycle",
        name: "Linked List Cycle",
        pattern: Pattern::FastSlow,
        difficulty: Difficulty::Easy,
        description: "Detect a cycle by racing a slow pointer against a fast one",
        example: ExampleInput::Links {
            next: &[1, 2, 3, 4, 2],
            start: 0,
        },
    },
    Problem {
        id: "binary-search",
        name: "Binary Search",
        pattern: Pattern::BinarySearch,
        difficulty: Difficulty::Easy,
        description: "Find a target in a sorted array by halving the search range",
        example: ExampleInput::TargetSearch {
            numbers: &[-1, 0, 3, 5, 9, 12],
            target: 9,
        },
    },
    Problem {
        id: "level-order",
        name: "Binary Tree Level Order Traversal",
        pattern: Pattern::Bfs,
        difficulty: Difficulty::Medium,
        description: "Visit tree nodes level by level using a queue",
        example: ExampleInput::Tree {
            nodes: &[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)],
        },
    },
    Problem {
        id: "preorder",
        name: "Binary Tree Preorder Traversal",
        pattern: Pattern::Dfs,
        difficulty: Difficulty::Easy,
        description: "Visit root before children using an explicit stack",
        example: ExampleInput::Tree {
            nodes: &[Some(1), Some(2), Some(3), Some(4), Some(5)],
        },
    },
    Problem {
        id: "permutations",
        name: "Permutations",
        pattern: Pattern::Backtracking,
        difficulty: Difficulty::Medium,
        description: "Enumerate all orderings by choosing, exploring, and backtracking",
        example: ExampleInput::Choices { nums: &[1, 2, 3] },
    },
    Problem {
        id: "climb-stairs",
        name: "Climbing Stairs",
        pattern: Pattern::DynamicProgramming,
        difficulty: Difficulty::Easy,
        description: "Count ways to reach the top taking 1 or 2 steps at a time",
        example: ExampleInput::Count { n: 5 },
    },
];

/// The built-in problem set, one per pattern, in [`Pattern::ALL`] order.
pub fn catalog() -> &'static [Problem] {
    CATALOG
}

/// Look up a problem by id.
pub fn find(id: &str) -> Option<&'static Problem> {
    CATALOG.iter().find(|p| p.id == id)
}
