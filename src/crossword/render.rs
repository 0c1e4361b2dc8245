#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Text rendering of (possibly partial) assignments.

use crate::crossword::puzzle::Puzzle;
use crate::csp::assignment::Assignment;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Glyph drawn for blocked cells.
pub const BLOCK: char = '█';

impl Puzzle {
    /// Letters placed by `assignment`, row by row.
    ///
    /// Blocked cells and fillable cells no assigned word covers are `None`.
    #[must_use]
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut grid = vec![vec![None; self.structure.width()]; self.structure.height()];
        for (variable, word) in assignment.words(self) {
            for ((row, col), letter) in variable.cells().zip(word.chars()) {
                grid[row][col] = Some(letter);
            }
        }
        grid
    }

    /// Displays `assignment` on the grid.
    #[must_use]
    pub fn render<'a>(&'a self, assignment: &'a Assignment) -> Rendered<'a> {
        Rendered {
            puzzle: self,
            assignment,
        }
    }
}

/// A grid ready to print, see [`Puzzle::render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    puzzle: &'a Puzzle,
    assignment: &'a Assignment,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let structure = &self.puzzle.structure;
        let rows = self
            .puzzle
            .letter_grid(self.assignment)
            .into_iter()
            .enumerate()
            .map(|(row, letters)| {
                letters
                    .into_iter()
                    .enumerate()
                    .map(|(col, letter)| match letter {
                        Some(letter) => letter,
                        None if structure.is_fillable(row, col) => ' ',
                        None => BLOCK,
                    })
                    .collect::<String>()
            });
        write!(f, "{}", rows.format("\n"))
    }
}
