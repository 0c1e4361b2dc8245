#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Sequential backtracking search.
//!
//! Solving runs in two stages. Preprocessing enforces node consistency and
//! then AC-3 over every arc; if either leaves a domain empty the puzzle has no
//! solution and search never starts. Search then fills one variable at a time:
//!
//! 1.  If every variable holds a word, the assignment is returned.
//! 2.  Otherwise the configured `VariableSelection` picks an unassigned
//!     variable and the configured `ValueOrdering` lists its candidates.
//! 3.  Each candidate produces a fresh copy of the assignment. Copies that
//!     break a constraint are dropped at once, the rest are searched
//!     recursively. The first complete assignment found wins.
//! 4.  When every candidate fails the caller moves on to its next candidate.
//!
//! Search only reads the domains. Since each branch owns its own assignment,
//! a failed branch leaves nothing behind for its siblings.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::variable::VarId;
use crate::crossword::vocabulary::WordId;
use crate::csp::arc_consistency::ac3;
use crate::csp::assignment::Assignment;
use crate::csp::domain::Domains;
use crate::csp::solver::{DefaultConfig, SolutionStats, Solver, SolverConfig};
use crate::csp::value_ordering::ValueOrdering;
use crate::csp::variable_selection::VariableSelection;
use log::{debug, trace};

#[derive(Debug, Clone)]
pub struct Backtracking<'p, Config: SolverConfig = DefaultConfig> {
    pub puzzle: &'p Puzzle,
    /// Candidate words per variable. Shrunk by preprocessing, read by search.
    pub domains: Domains,
    pub selector: Config::VariableSelector,
    pub ordering: Config::ValueOrder,
    pub queue: Config::Queue,
    stats: SolutionStats,
}

impl<'p, Config: SolverConfig> Solver<'p, Config> for Backtracking<'p, Config> {
    fn new(puzzle: &'p Puzzle) -> Self {
        Self::from_parts(
            puzzle,
            Config::VariableSelector::new(puzzle),
            Config::ValueOrder::default(),
            Config::Queue::default(),
        )
    }

    fn solve(&mut self) -> Option<Assignment> {
        if !self.preprocess() {
            debug!("preprocessing found the puzzle unsatisfiable, skipping search");
            return None;
        }

        debug!(
            "searching {} variables, {} candidates left",
            self.puzzle.num_vars(),
            self.domains.total_size()
        );
        let solution = self.backtrack(Assignment::new(self.puzzle.num_vars()));
        debug!(
            "search {} after {} nodes, {} backtracks",
            if solution.is_some() { "succeeded" } else { "failed" },
            self.stats.nodes,
            self.stats.backtracks
        );
        solution
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}

impl<'p, Config: SolverConfig> Backtracking<'p, Config> {
    /// A solver using the given strategy instances.
    #[must_use]
    pub fn from_parts(
        puzzle: &'p Puzzle,
        selector: Config::VariableSelector,
        ordering: Config::ValueOrder,
        queue: Config::Queue,
    ) -> Self {
        Self {
            puzzle,
            domains: Domains::new(puzzle),
            selector,
            ordering,
            queue,
            stats: SolutionStats::default(),
        }
    }

    /// Enforces node consistency and then AC-3 over every arc.
    ///
    /// Returns `false` if some domain ended up empty, in which case the puzzle
    /// has no solution.
    pub fn preprocess(&mut self) -> bool {
        self.stats.node_consistency_removals += self.domains.enforce_node_consistency(self.puzzle);
        if let Some(var) = (0..self.domains.num_vars()).find(|&v| self.domains.is_empty(v)) {
            debug!("no word fits {}", self.puzzle.variable(var));
            self.stats.wipeout = true;
            return false;
        }

        let result = ac3(self.puzzle, &mut self.domains, None, &mut self.queue);
        self.stats.revisions += result.revisions;
        self.stats.arc_removals += result.removals;
        self.stats.wipeout = !result.is_consistent();
        result.is_consistent()
    }

    /// Searches for a completion of `assignment`.
    ///
    /// `assignment` is expected to be consistent; the search only checks the
    /// extensions it makes.
    pub fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        let depth = assignment.num_assigned();
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if assignment.is_complete() {
            return Some(assignment);
        }

        let var = self.selector.pick(self.puzzle, &self.domains, &assignment)?;
        let candidates = self.ordering.order(self.puzzle, &self.domains, var, &assignment);
        trace!(
            "depth {depth}: {} with {} candidates",
            self.puzzle.variable(var),
            candidates.len()
        );

        candidates
            .into_iter()
            .find_map(|word| self.try_candidate(&assignment, var, word))
    }

    /// Extends `assignment` with `var -> word` and searches below it if the
    /// extension is consistent.
    pub fn try_candidate(
        &mut self,
        assignment: &Assignment,
        var: VarId,
        word: WordId,
    ) -> Option<Assignment> {
        let next = self.extend(assignment, var, word);
        let solution = if next.is_consistent(self.puzzle) {
            self.backtrack(next)
        } else {
            None
        };
        if solution.is_none() {
            self.stats.backtracks += 1;
        }
        solution
    }

    /// A copy of `assignment` with `var` set to `word`.
    ///
    /// # Panics
    ///
    /// If `var` is already assigned or `word` is not in its domain.
    pub fn extend(&mut self, assignment: &Assignment, var: VarId, word: WordId) -> Assignment {
        assert!(
            self.domains.contains(var, word),
            "word {:?} is not a candidate for {}",
            &self.puzzle.vocabulary[word],
            self.puzzle.variable(var)
        );
        self.stats.nodes += 1;
        trace!("try {} = {}", self.puzzle.variable(var), &self.puzzle.vocabulary[word]);
        assignment.with(var, word)
    }
}
