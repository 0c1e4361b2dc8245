#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking with the first decision split across threads.
//!
//! Preprocessing runs once. The root variable and its ordered candidates are
//! chosen exactly as the sequential search would choose them, then every
//! candidate is searched on its own clone of the solver with rayon. The
//! solution reported is the one under the earliest candidate in that order,
//! so the result matches `Backtracking` whenever variable selection is
//! deterministic. Workers under later candidates are abandoned once an
//! earlier one succeeds.
//!
//! Search counters are summed over every worker that ran, so they depend on
//! scheduling and differ from run to run.

use crate::crossword::puzzle::Puzzle;
use crate::csp::assignment::Assignment;
use crate::csp::backtracking::Backtracking;
use crate::csp::solver::{DefaultConfig, SolutionStats, Solver, SolverConfig};
use crate::csp::value_ordering::ValueOrdering;
use crate::csp::variable_selection::VariableSelection;
use log::debug;
use rayon::prelude::*;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct ParallelBacktracking<'p, Config: SolverConfig = DefaultConfig> {
    pub search: Backtracking<'p, Config>,
    stats: SolutionStats,
}

impl<'p, Config> Solver<'p, Config> for ParallelBacktracking<'p, Config>
where
    Config: SolverConfig,
    Config::VariableSelector: Send + Sync,
    Config::ValueOrder: Send + Sync,
    Config::Queue: Send + Sync,
{
    fn new(puzzle: &'p Puzzle) -> Self {
        Self::from_search(Backtracking::new(puzzle))
    }

    fn solve(&mut self) -> Option<Assignment> {
        let preprocessed = self.search.preprocess();
        self.stats = self.search.stats();
        if !preprocessed {
            return None;
        }

        let puzzle = self.search.puzzle;
        let root = Assignment::new(puzzle.num_vars());
        let Some(var) = self
            .search
            .selector
            .pick(puzzle, &self.search.domains, &root)
        else {
            return Some(root);
        };
        let candidates = self
            .search
            .ordering
            .order(puzzle, &self.search.domains, var, &root);
        debug!(
            "splitting {} over {} candidates",
            puzzle.variable(var),
            candidates.len()
        );

        let search = &self.search;
        let merged = Mutex::new(self.stats);
        let solution = candidates.par_iter().find_map_first(|&word| {
            let mut worker = search.clone();
            let found = worker.try_candidate(&root, var, word);
            if let Ok(mut stats) = merged.lock() {
                stats.merge_search(&worker.stats());
            }
            found
        });

        self.stats = merged.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner);
        solution
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}

impl<'p, Config: SolverConfig> ParallelBacktracking<'p, Config> {
    /// Splits the search of an already configured sequential solver.
    #[must_use]
    pub fn from_search(search: Backtracking<'p, Config>) -> Self {
        Self {
            search,
            stats: SolutionStats::default(),
        }
    }
}
