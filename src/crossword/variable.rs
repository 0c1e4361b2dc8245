#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Crossword variables: maximal runs of fillable cells that each take one word.

use std::fmt::{Display, Formatter};

/// Dense index of a variable inside a [`crate::crossword::puzzle::Puzzle`].
pub type VarId = usize;

/// The orientation of a run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Unit step `(d_row, d_col)` taken when moving one cell along this direction.
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A single word slot in the grid.
///
/// Identified purely by where it starts, which way it runs and how long it is,
/// so two variables compare equal exactly when they describe the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    /// Orientation of the run.
    pub direction: Direction,
    /// Number of cells, and therefore the required word length.
    pub length: usize,
}

impl Variable {
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// The grid cell holding the `k`-th letter of this variable.
    #[must_use]
    pub const fn cell(&self, k: usize) -> (usize, usize) {
        let (dr, dc) = self.direction.step();
        (self.row + k * dr, self.col + k * dc)
    }

    /// All cells covered by this variable, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|k| self.cell(k))
    }

    /// Local letter index of `cell` within this variable, if it is covered.
    #[must_use]
    pub const fn index_of(&self, cell: (usize, usize)) -> Option<usize> {
        let (row, col) = cell;
        match self.direction {
            Direction::Across if row == self.row && col >= self.col && col < self.col + self.length => {
                Some(col - self.col)
            }
            Direction::Down if col == self.col && row >= self.row && row < self.row + self.length => {
                Some(row - self.row)
            }
            _ => None,
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_across() {
        let v = Variable::new(2, 1, Direction::Across, 3);
        assert_eq!(v.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_cells_down() {
        let v = Variable::new(0, 4, Direction::Down, 2);
        assert_eq!(v.cells().collect::<Vec<_>>(), vec![(0, 4), (1, 4)]);
    }

    #[test]
    fn test_index_of() {
        let across = Variable::new(1, 1, Direction::Across, 4);
        assert_eq!(across.index_of((1, 3)), Some(2));
        assert_eq!(across.index_of((1, 5)), None);
        assert_eq!(across.index_of((0, 1)), None);

        let down = Variable::new(1, 1, Direction::Down, 4);
        assert_eq!(down.index_of((4, 1)), Some(3));
        assert_eq!(down.index_of((0, 1)), None);
    }

    #[test]
    fn test_display() {
        let v = Variable::new(0, 1, Direction::Down, 5);
        assert_eq!(v.to_string(), "(0, 1) down : 5");
    }
}
