#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for choosing which unassigned variable the search fills next.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::variable::VarId;
use crate::csp::assignment::Assignment;
use crate::csp::domain::Domains;
use clap::ValueEnum;
use std::cmp::Reverse;
use std::fmt::{Debug, Display};

/// Seed used by `RandomOrder` when none is given.
pub const DEFAULT_SEED: u64 = 0x5eed;

pub trait VariableSelection: Debug + Clone {
    fn new(puzzle: &Puzzle) -> Self;

    /// Picks an unassigned variable, or `None` if every variable is assigned.
    fn pick(&mut self, puzzle: &Puzzle, domains: &Domains, assignment: &Assignment)
    -> Option<VarId>;
}

/// Minimum remaining values, ties broken by highest degree, then lowest id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn new(_: &Puzzle) -> Self {
        Self
    }

    fn pick(
        &mut self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VarId> {
        (0..puzzle.num_vars())
            .filter(|&v| !assignment.is_assigned(v))
            .min_by_key(|&v| (domains.len(v), Reverse(puzzle.neighbors(v).len()), v))
    }
}

/// Lowest unassigned id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn new(_: &Puzzle) -> Self {
        Self
    }

    fn pick(&mut self, puzzle: &Puzzle, _: &Domains, assignment: &Assignment) -> Option<VarId> {
        (0..puzzle.num_vars()).find(|&v| !assignment.is_assigned(v))
    }
}

/// Uniformly random unassigned variable, reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct RandomOrder(fastrand::Rng);

impl RandomOrder {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl VariableSelection for RandomOrder {
    fn new(_: &Puzzle) -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    fn pick(&mut self, puzzle: &Puzzle, _: &Domains, assignment: &Assignment) -> Option<VarId> {
        let unassigned: Vec<VarId> = (0..puzzle.num_vars())
            .filter(|&v| !assignment.is_assigned(v))
            .collect();
        if unassigned.is_empty() {
            return None;
        }
        Some(unassigned[self.0.usize(..unassigned.len())])
    }
}

#[derive(Debug, Clone)]
pub enum VariableSelectionImpls {
    MinimumRemainingValues(MinimumRemainingValues),
    FixedOrder(FixedOrder),
    RandomOrder(RandomOrder),
}

impl VariableSelection for VariableSelectionImpls {
    fn new(puzzle: &Puzzle) -> Self {
        Self::MinimumRemainingValues(MinimumRemainingValues::new(puzzle))
    }

    fn pick(
        &mut self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VarId> {
        match self {
            Self::MinimumRemainingValues(s) => s.pick(puzzle, domains, assignment),
            Self::FixedOrder(s) => s.pick(puzzle, domains, assignment),
            Self::RandomOrder(s) => s.pick(puzzle, domains, assignment),
        }
    }
}

/// Variable selection strategy named on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum VariableSelectionType {
    /// Fewest remaining values, then most neighbors.
    #[default]
    Mrv,
    /// Derivation order.
    Fixed,
    /// Seeded random choice.
    Random,
}

impl Display for VariableSelectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mrv => write!(f, "mrv"),
            Self::Fixed => write!(f, "fixed"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl VariableSelectionType {
    #[must_use]
    pub fn to_impl(self, puzzle: &Puzzle, seed: u64) -> VariableSelectionImpls {
        match self {
            Self::Mrv => {
                VariableSelectionImpls::MinimumRemainingValues(MinimumRemainingValues::new(puzzle))
            }
            Self::Fixed => VariableSelectionImpls::FixedOrder(FixedOrder::new(puzzle)),
            Self::Random => VariableSelectionImpls::RandomOrder(RandomOrder::with_seed(seed)),
        }
    }
}
