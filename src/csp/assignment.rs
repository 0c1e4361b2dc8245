#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Partial and complete mappings from variables to words.
//!
//! An `Assignment` is a plain value: search extends it by producing a new copy
//! for every branch (see [`Assignment::with`]), so a failed branch never leaves
//! anything behind in its siblings or its caller.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::variable::{VarId, Variable};
use crate::crossword::vocabulary::WordId;
use core::ops::Index;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Assignment(Vec<Option<WordId>>);

impl Index<VarId> for Assignment {
    type Output = Option<WordId>;

    fn index(&self, index: VarId) -> &Self::Output {
        &self.0[index]
    }
}

impl Assignment {
    /// An empty assignment over `num_vars` variables.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self(vec![None; num_vars])
    }

    /// Number of variables this assignment ranges over.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Number of variables currently mapped to a word.
    #[must_use]
    pub fn num_assigned(&self) -> usize {
        self.0.iter().filter(|w| w.is_some()).count()
    }

    #[must_use]
    pub fn get(&self, var: VarId) -> Option<WordId> {
        self.0.get(var).copied().flatten()
    }

    #[must_use]
    pub fn is_assigned(&self, var: VarId) -> bool {
        self.get(var).is_some()
    }

    /// Maps `var` to `word`.
    ///
    /// # Panics
    ///
    /// If `var` already holds a word. Overwriting a filled slot is a bug in the
    /// caller, not a search outcome.
    pub fn assign(&mut self, var: VarId, word: WordId) {
        assert!(
            self.0[var].is_none(),
            "variable {var} is already assigned word {:?}",
            self.0[var]
        );
        self.0[var] = Some(word);
    }

    /// A copy of this assignment extended with `var -> word`.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Assignment::assign`].
    #[must_use]
    pub fn with(&self, var: VarId, word: WordId) -> Self {
        let mut next = self.clone();
        next.assign(var, word);
        next
    }

    /// Whether `word` is already used by any variable.
    #[must_use]
    pub fn contains_word(&self, word: WordId) -> bool {
        self.0.contains(&Some(word))
    }

    /// Assigned `(variable, word)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, WordId)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(v, w)| w.map(|w| (v, w)))
    }

    /// Assigned pairs resolved against `puzzle` into variables and word text.
    pub fn words<'a>(&'a self, puzzle: &'a Puzzle) -> impl Iterator<Item = (Variable, &'a str)> + 'a {
        self.iter()
            .map(move |(v, w)| (puzzle.variable(v), &puzzle.vocabulary[w]))
    }

    /// Whether every variable is mapped to a word.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Checks the assignment against every constraint of `puzzle`:
    ///
    /// - no word is used twice,
    /// - every word has the length of its variable,
    /// - every pair of assigned crossing variables agrees at the shared cell.
    ///
    /// Unassigned variables are ignored, so a partial assignment can be consistent.
    #[must_use]
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        let mut seen = FxHashSet::default();
        for (var, word) in self.iter() {
            if !seen.insert(word) {
                return false;
            }
            if puzzle.vocabulary.word_len(word) != puzzle.variable(var).length {
                return false;
            }
        }

        self.iter().all(|(var, word)| {
            puzzle.neighbors(var).iter().all(|&other| {
                self.get(other)
                    .is_none_or(|other_word| puzzle.agree(var, word, other, other_word))
            })
        })
    }
}
