use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::words::{render_lines, split_words, Paragraph};
use crate::{
    binary_search, brute_force, divide_and_conquer, dynamic_programming, shortest_path, smawk,
};

/// Selects which solver computes the breaking. Every variant minimizes the
/// same penalty over the same inputs; they differ in running time and in
/// how they search the space of break points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// Exhaustive enumeration of break subsets; ground truth, capped at 32
    /// words.
    BruteForce,
    /// O(n²) table fill against a precomputed slack matrix.
    DynamicProgramming,
    /// O(n · width) forward relaxation over the break DAG.
    ShortestPath,
    /// O(n log n) monotone matrix search with an explicit block stack.
    DivideAndConquer,
    /// O(n log n) concave candidate queue with binary crossover search.
    BinarySearch,
    /// O(n) SMAWK column-minima search inside a doubling window.
    Smawk,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BruteForce,
        Algorithm::DynamicProgramming,
        Algorithm::ShortestPath,
        Algorithm::DivideAndConquer,
        Algorithm::BinarySearch,
        Algorithm::Smawk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::DynamicProgramming => "dynamic_programming",
            Algorithm::ShortestPath => "shortest_path",
            Algorithm::DivideAndConquer => "divide_and_conquer",
            Algorithm::BinarySearch => "binary_search",
            Algorithm::Smawk => "smawk",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| BreakError::UnknownAlgorithm(s.to_string()))
    }
}

/// Rejected inputs. An overflowing output line is not an error: when a
/// word is wider than the limit, the line holding it alone is the best
/// achievable breaking and is returned normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// The width budget must admit at least one character per line.
    #[error("max_width must be at least 1")]
    InvalidWidth,
    /// The brute-force solver enumerates 2^(n-1) subsets and is capped
    /// rather than left to run without bound.
    #[error("{count} words exceed the brute force limit of {limit}")]
    TooManyWords { count: usize, limit: usize },
    /// No algorithm goes by this name (see [`Algorithm::name`]).
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}

/// Break `text` into lines at most `max_width` characters wide, minimizing
/// the summed penalty: squared leftover space per line, overflow scaled by
/// a large constant for words wider than the limit.
///
/// Runs of whitespace separate words and leading/trailing whitespace is
/// dropped; words are re-joined with single spaces, so concatenating the
/// returned lines reproduces the input words in order. Empty input yields
/// no lines.
pub fn break_lines(
    text: &str,
    max_width: usize,
    algorithm: Algorithm,
) -> Result<Vec<String>, BreakError> {
    if max_width == 0 {
        return Err(BreakError::InvalidWidth);
    }
    let words = split_words(text);
    if words.is_empty() {
        return Ok(Vec::new());
    }
    if algorithm == Algorithm::BruteForce && words.len() > brute_force::WORD_LIMIT {
        return Err(BreakError::TooManyWords {
            count: words.len(),
            limit: brute_force::WORD_LIMIT,
        });
    }

    let paragraph = Paragraph::new(&words, max_width);
    let breaks = match algorithm {
        Algorithm::BruteForce => brute_force::solve(&paragraph),
        Algorithm::DynamicProgramming => dynamic_programming::solve(&paragraph),
        Algorithm::ShortestPath => shortest_path::solve(&paragraph),
        Algorithm::DivideAndConquer => divide_and_conquer::solve(&paragraph),
        Algorithm::BinarySearch => binary_search::solve(&paragraph),
        Algorithm::Smawk => smawk::solve(&paragraph),
    };
    Ok(render_lines(&words, &breaks))
}
