#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for ordering the candidate words of the variable being filled.
//!
//! Every ordering drops words the assignment already uses, since the
//! distinctness constraint rules them out no matter where they are tried.
//! Orderings are stable: candidates with equal scores keep vocabulary order.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::variable::VarId;
use crate::crossword::vocabulary::WordId;
use crate::csp::assignment::Assignment;
use crate::csp::domain::Domains;
use clap::ValueEnum;
use std::fmt::{Debug, Display};

pub trait ValueOrdering: Debug + Clone + Default {
    /// Candidates of `var` in the order search should try them.
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        var: VarId,
        assignment: &Assignment,
    ) -> Vec<WordId>;
}

fn unused(domains: &Domains, var: VarId, assignment: &Assignment) -> Vec<WordId> {
    domains[var]
        .iter()
        .copied()
        .filter(|&w| !assignment.contains_word(w))
        .collect()
}

/// Cheap least-constraining-value estimate.
///
/// A candidate scores one point for each neighbor whose domain still holds a
/// word containing the candidate as a substring. Lower scores go first. This
/// only approximates how constraining a word is; it never affects which
/// assignments are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeastConstrainingValue;

impl ValueOrdering for LeastConstrainingValue {
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        var: VarId,
        assignment: &Assignment,
    ) -> Vec<WordId> {
        let vocabulary = &puzzle.vocabulary;
        let mut candidates = unused(domains, var, assignment);
        candidates.sort_by_cached_key(|&word| {
            let text = &vocabulary[word];
            puzzle
                .neighbors(var)
                .iter()
                .filter(|&&n| domains[n].iter().any(|&other| vocabulary[other].contains(text)))
                .count()
        });
        candidates
    }
}

/// Exact least-constraining-value ordering.
///
/// Scores a candidate by how many words it would eliminate from the domains
/// of its unassigned neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EliminationCount;

impl ValueOrdering for EliminationCount {
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        var: VarId,
        assignment: &Assignment,
    ) -> Vec<WordId> {
        let mut candidates = unused(domains, var, assignment);
        candidates.sort_by_cached_key(|&word| {
            puzzle
                .neighbors(var)
                .iter()
                .filter(|&&n| !assignment.is_assigned(n))
                .map(|&n| {
                    domains[n]
                        .iter()
                        .filter(|&&other| other == word || !puzzle.agree(var, word, n, other))
                        .count()
                })
                .sum::<usize>()
        });
        candidates
    }
}

/// Vocabulary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainOrder;

impl ValueOrdering for DomainOrder {
    fn order(
        &self,
        _: &Puzzle,
        domains: &Domains,
        var: VarId,
        assignment: &Assignment,
    ) -> Vec<WordId> {
        unused(domains, var, assignment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrderingImpls {
    LeastConstrainingValue(LeastConstrainingValue),
    EliminationCount(EliminationCount),
    DomainOrder(DomainOrder),
}

impl Default for ValueOrderingImpls {
    fn default() -> Self {
        Self::LeastConstrainingValue(LeastConstrainingValue)
    }
}

impl ValueOrdering for ValueOrderingImpls {
    fn order(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        var: VarId,
        assignment: &Assignment,
    ) -> Vec<WordId> {
        match self {
            Self::LeastConstrainingValue(o) => o.order(puzzle, domains, var, assignment),
            Self::EliminationCount(o) => o.order(puzzle, domains, var, assignment),
            Self::DomainOrder(o) => o.order(puzzle, domains, var, assignment),
        }
    }
}

/// Value ordering strategy named on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum ValueOrderingType {
    /// Substring-based least-constraining-value estimate.
    #[default]
    Lcv,
    /// Count of neighbor values each candidate eliminates.
    Elimination,
    /// Plain vocabulary order.
    Domain,
}

impl Display for ValueOrderingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lcv => write!(f, "lcv"),
            Self::Elimination => write!(f, "elimination"),
            Self::Domain => write!(f, "domain"),
        }
    }
}

impl ValueOrderingType {
    #[must_use]
    pub const fn to_impl(self) -> ValueOrderingImpls {
        match self {
            Self::Lcv => ValueOrderingImpls::LeastConstrainingValue(LeastConstrainingValue),
            Self::Elimination => ValueOrderingImpls::EliminationCount(EliminationCount),
            Self::Domain => ValueOrderingImpls::DomainOrder(DomainOrder),
        }
    }
}
