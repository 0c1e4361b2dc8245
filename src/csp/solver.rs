#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver interface shared by the sequential and parallel searches, the
//! configuration that picks their strategies, and the statistics they report.

use crate::crossword::puzzle::Puzzle;
use crate::csp::arc_consistency::{ArcQueue, ArcQueueImpls, FifoQueue};
use crate::csp::assignment::Assignment;
use crate::csp::backtracking::Backtracking;
use crate::csp::parallel::ParallelBacktracking;
use crate::csp::value_ordering::{LeastConstrainingValue, ValueOrdering, ValueOrderingImpls};
use crate::csp::variable_selection::{
    MinimumRemainingValues, VariableSelection, VariableSelectionImpls,
};
use clap::ValueEnum;
use std::fmt::{Debug, Display};

/// Counters collected during one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolutionStats {
    /// Words dropped for having the wrong length.
    pub node_consistency_removals: usize,
    /// Calls to `revise` made by arc consistency.
    pub revisions: usize,
    /// Words dropped by arc consistency.
    pub arc_removals: usize,
    /// Whether preprocessing emptied a domain.
    pub wipeout: bool,
    /// Assignments extended during search.
    pub nodes: usize,
    /// Extensions rejected as inconsistent or exhausted without success.
    pub backtracks: usize,
    /// Deepest assignment size reached.
    pub max_depth: usize,
}

impl SolutionStats {
    /// Adds the search counters of `other` to `self`.
    ///
    /// Preprocessing counters are left alone: parallel workers share a single
    /// preprocessing pass.
    pub fn merge_search(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.backtracks += other.backtracks;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Chooses the strategies a solver runs with.
pub trait SolverConfig: Debug + Clone {
    type VariableSelector: VariableSelection;
    type ValueOrder: ValueOrdering;
    type Queue: ArcQueue;
}

/// Minimum remaining values, substring least-constraining-value, FIFO arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueOrder = LeastConstrainingValue;
    type Queue = FifoQueue;
}

/// Strategies chosen at runtime, as the command line does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DynamicConfig;

impl SolverConfig for DynamicConfig {
    type VariableSelector = VariableSelectionImpls;
    type ValueOrder = ValueOrderingImpls;
    type Queue = ArcQueueImpls;
}

pub trait Solver<'p, Config: SolverConfig = DefaultConfig> {
    /// A solver for `puzzle` with the strategies' default instances.
    fn new(puzzle: &'p Puzzle) -> Self;

    /// Runs preprocessing and search.
    ///
    /// Returns a complete assignment satisfying every constraint, or `None`
    /// if the puzzle has no solution.
    fn solve(&mut self) -> Option<Assignment>;

    fn stats(&self) -> SolutionStats;
}

/// Either solver behind one type, picked at run time.
#[derive(Debug, Clone)]
pub enum SolverImpls<'p, Config: SolverConfig = DynamicConfig> {
    Backtracking(Box<Backtracking<'p, Config>>),
    Parallel(Box<ParallelBacktracking<'p, Config>>),
}

impl<'p, Config> Solver<'p, Config> for SolverImpls<'p, Config>
where
    Config: SolverConfig,
    Config::VariableSelector: Send + Sync,
    Config::ValueOrder: Send + Sync,
    Config::Queue: Send + Sync,
{
    fn new(puzzle: &'p Puzzle) -> Self {
        Self::Backtracking(Box::new(Backtracking::new(puzzle)))
    }

    fn solve(&mut self) -> Option<Assignment> {
        match self {
            Self::Backtracking(s) => s.solve(),
            Self::Parallel(s) => s.solve(),
        }
    }

    fn stats(&self) -> SolutionStats {
        match self {
            Self::Backtracking(s) => s.stats(),
            Self::Parallel(s) => s.stats(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum SolverType {
    /// Single-threaded backtracking.
    #[default]
    Backtracking,
    /// Backtracking with the first decision split across threads.
    Parallel,
}

impl Display for SolverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backtracking => write!(f, "backtracking"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

impl SolverType {
    /// Wraps a configured sequential search in the chosen solver.
    #[must_use]
    pub fn to_impl<Config: SolverConfig>(
        self,
        search: Backtracking<'_, Config>,
    ) -> SolverImpls<'_, Config> {
        match self {
            Self::Backtracking => SolverImpls::Backtracking(Box::new(search)),
            Self::Parallel => {
                SolverImpls::Parallel(Box::new(ParallelBacktracking::from_search(search)))
            }
        }
    }
}
