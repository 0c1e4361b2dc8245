#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A crossword puzzle ready to be solved: the grid structure, the vocabulary,
//! and everything derived from the grid once up front.
//!
//! Derivation walks the grid in row-major order. At every cell an across run
//! is considered before a down run; a run starts at a fillable cell whose
//! predecessor in that direction is blocked (or off the grid) and covers the
//! consecutive fillable cells after it. Runs of a single cell are not words.
//!
//! Each grid cell belongs to at most one across and one down variable, so two
//! variables overlap in at most one cell. The overlap table maps every ordered
//! pair of intersecting variables to the letter index of the shared cell in
//! each of them.

use crate::crossword::structure::Structure;
use crate::crossword::variable::{Direction, VarId, Variable};
use crate::crossword::vocabulary::{Vocabulary, WordId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

/// Neighbor lists are short: a variable crosses at most one other per letter.
pub type Neighbors = SmallVec<[VarId; 8]>;

/// Letter indices `(in_x, in_y)` at which two crossing variables must agree.
pub type Overlap = (usize, usize);

/// Failure to read a puzzle from disk.
#[derive(Debug)]
pub enum LoadError {
    Structure { path: PathBuf, source: io::Error },
    Words { path: PathBuf, source: io::Error },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structure { path, source } => {
                write!(f, "cannot read structure {}: {source}", path.display())
            }
            Self::Words { path, source } => {
                write!(f, "cannot read words {}: {source}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Structure { source, .. } | Self::Words { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub structure: Structure,
    pub vocabulary: Vocabulary,
    variables: Vec<Variable>,
    overlaps: FxHashMap<(VarId, VarId), Overlap>,
    neighbors: Vec<Neighbors>,
}

impl Puzzle {
    /// Derives variables, overlaps and neighbor lists from `structure`.
    #[must_use]
    pub fn new(structure: Structure, vocabulary: Vocabulary) -> Self {
        let variables = derive_variables(&structure);
        let overlaps = derive_overlaps(&variables);

        let mut neighbors = vec![Neighbors::new(); variables.len()];
        for &(x, y) in overlaps.keys() {
            neighbors[x].push(y);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            structure,
            vocabulary,
            variables,
            overlaps,
            neighbors,
        }
    }

    /// Loads a structure file and a word file.
    ///
    /// # Errors
    ///
    /// `LoadError` naming whichever file could not be read.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        structure: P,
        words: Q,
    ) -> Result<Self, LoadError> {
        let structure_path = structure.as_ref();
        let words_path = words.as_ref();
        let structure = Structure::from_file(structure_path).map_err(|source| LoadError::Structure {
            path: structure_path.to_path_buf(),
            source,
        })?;
        let vocabulary = Vocabulary::from_file(words_path).map_err(|source| LoadError::Words {
            path: words_path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(structure, vocabulary))
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[must_use]
    pub fn variable(&self, var: VarId) -> Variable {
        self.variables[var]
    }

    /// The overlap of `x` with `y`, or `None` if they share no cell.
    #[must_use]
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Variables sharing a cell with `var`, in ascending id order.
    #[must_use]
    pub fn neighbors(&self, var: VarId) -> &[VarId] {
        &self.neighbors[var]
    }

    /// Every ordered pair of variables with a defined overlap.
    pub fn arcs(&self) -> impl Iterator<Item = (VarId, VarId)> + '_ {
        (0..self.num_vars()).flat_map(move |x| self.neighbors(x).iter().map(move |&y| (x, y)))
    }

    /// Whether words `a` (placed in `x`) and `b` (placed in `y`) agree where
    /// the two variables cross. Variables that do not cross always agree.
    #[must_use]
    pub fn agree(&self, x: VarId, a: WordId, y: VarId, b: WordId) -> bool {
        self.overlap(x, y).is_none_or(|(i, j)| {
            self.vocabulary.letter(a, i) == self.vocabulary.letter(b, j)
        })
    }
}

fn derive_variables(structure: &Structure) -> Vec<Variable> {
    let mut variables = Vec::new();
    for row in 0..structure.height() {
        for col in 0..structure.width() {
            if !structure.is_fillable(row, col) {
                continue;
            }
            for direction in [Direction::Across, Direction::Down] {
                let starts_run = match direction {
                    Direction::Across => col == 0 || !structure.is_fillable(row, col - 1),
                    Direction::Down => row == 0 || !structure.is_fillable(row - 1, col),
                };
                if !starts_run {
                    continue;
                }
                let (dr, dc) = direction.step();
                let length = (0..)
                    .take_while(|&k| structure.is_fillable(row + k * dr, col + k * dc))
                    .count();
                if length > 1 {
                    variables.push(Variable::new(row, col, direction, length));
                }
            }
        }
    }
    variables
}

fn derive_overlaps(variables: &[Variable]) -> FxHashMap<(VarId, VarId), Overlap> {
    let mut by_cell: FxHashMap<(usize, usize), SmallVec<[VarId; 2]>> = FxHashMap::default();
    for (id, var) in variables.iter().enumerate() {
        for cell in var.cells() {
            by_cell.entry(cell).or_default().push(id);
        }
    }

    let mut overlaps = FxHashMap::default();
    for (&cell, owners) in &by_cell {
        let &[x, y] = owners.as_slice() else {
            continue;
        };
        if let (Some(i), Some(j)) = (variables[x].index_of(cell), variables[y].index_of(cell)) {
            overlaps.insert((x, y), (i, j));
            overlaps.insert((y, x), (j, i));
        }
    }
    overlaps
}
