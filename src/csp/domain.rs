#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Candidate word sets per variable.
//!
//! Every domain starts as the full vocabulary and only ever shrinks. Word ids
//! are kept in ascending order, which is vocabulary order, so membership tests
//! are binary searches and iteration order is stable across runs.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::variable::VarId;
use crate::crossword::vocabulary::WordId;
use core::ops::Index;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domains(Vec<Vec<WordId>>);

impl Index<VarId> for Domains {
    type Output = [WordId];

    fn index(&self, index: VarId) -> &Self::Output {
        &self.0[index]
    }
}

impl Domains {
    /// Every variable of `puzzle` gets the whole vocabulary.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        let all: Vec<WordId> = puzzle.vocabulary.ids().collect();
        Self(vec![all; puzzle.num_vars()])
    }

    /// Removes every word whose length differs from its variable's length.
    ///
    /// A domain may end up empty; that is left for arc consistency or search
    /// to report. Returns the number of words removed overall.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle) -> usize {
        let mut removed = 0;
        for (var, domain) in self.0.iter_mut().enumerate() {
            let length = puzzle.variable(var).length;
            let before = domain.len();
            domain.retain(|&w| puzzle.vocabulary.word_len(w) == length);
            removed += before - domain.len();
        }
        debug!("node consistency removed {removed} values");
        removed
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Size of the domain of `var`.
    #[must_use]
    pub fn len(&self, var: VarId) -> usize {
        self.0[var].len()
    }

    #[must_use]
    pub fn is_empty(&self, var: VarId) -> bool {
        self.0[var].is_empty()
    }

    /// Whether `word` is still a candidate for `var`.
    #[must_use]
    pub fn contains(&self, var: VarId, word: WordId) -> bool {
        self.0[var].binary_search(&word).is_ok()
    }

    /// Keeps the candidates of `var` for which `keep` holds, returning how many were dropped.
    pub fn retain<F: FnMut(WordId) -> bool>(&mut self, var: VarId, mut keep: F) -> usize {
        let domain = &mut self.0[var];
        let before = domain.len();
        domain.retain(|&w| keep(w));
        before - domain.len()
    }

    /// Sum of all domain sizes.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Whether every domain here is a subset of the matching domain in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .enumerate()
                .all(|(var, domain)| domain.iter().all(|&w| other.contains(var, w)))
    }
}
