//! This crate fills crossword grids from a word list by treating the grid as a
//! constraint satisfaction problem: node and arc consistency prune the
//! candidate words, then backtracking search finds a fill.

/// The `crossword` module describes puzzles: the grid, the word list and the
/// word slots with the cells they share.
pub mod crossword;

/// The `csp` module holds the solving engine: domains, AC-3, heuristics and
/// the sequential and parallel backtracking solvers.
pub mod csp;

use crate::crossword::puzzle::Puzzle;
use crate::csp::assignment::Assignment;
use crate::csp::backtracking::Backtracking;
use crate::csp::solver::{DefaultConfig, Solver};

/// Solves `puzzle` with the default strategies.
///
/// Returns a complete assignment using every word at most once and agreeing
/// at every crossing, or `None` if no such fill exists.
#[must_use]
pub fn solve(puzzle: &Puzzle) -> Option<Assignment> {
    Backtracking::<DefaultConfig>::new(puzzle).solve()
}
