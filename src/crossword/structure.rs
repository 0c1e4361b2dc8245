#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The static shape of a crossword grid.
//!
//! A structure records only which cells may hold a letter. It is parsed from a
//! plain text layout where `_` marks a fillable cell and any other character
//! marks a blocked one:
//!
//! ```text
//! #___#
//! #_##_
//! #_##_
//! #_##_
//! #____
//! ```
//!
//! Lines shorter than the widest line are padded with blocked cells, so the
//! text format itself can never produce a ragged grid. The programmatic
//! constructors are stricter and reject inconsistent dimensions.

use bit_vec::BitVec;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead};
use std::path::Path;

/// The character marking a fillable cell in the text format.
pub const FILLABLE: char = '_';

/// Reasons a grid description cannot be turned into a [`Structure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The flat cell list does not hold `width * height` entries.
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
    /// A row does not have the same length as the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Display for StructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch {
                width,
                height,
                cells,
            } => write!(
                f,
                "grid of {width}x{height} needs {} cells, got {cells}",
                width * height
            ),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl Error for StructureError {}

/// Rectangular grid of fillable and blocked cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Structure {
    width: usize,
    height: usize,
    cells: BitVec,
}

impl Structure {
    /// Builds a structure from a row-major list of cells, `true` meaning fillable.
    ///
    /// # Errors
    ///
    /// `StructureError::DimensionMismatch` if `cells` does not hold exactly
    /// `width * height` entries.
    pub fn new(
        width: usize,
        height: usize,
        cells: impl IntoIterator<Item = bool>,
    ) -> Result<Self, StructureError> {
        let cells: BitVec = cells.into_iter().collect();
        if cells.len() != width * height {
            return Err(StructureError::DimensionMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a structure from explicit rows, all of which must have the same length.
    ///
    /// # Errors
    ///
    /// `StructureError::RaggedRow` for the first row whose length differs from row 0.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, StructureError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != width)
        {
            return Err(StructureError::RaggedRow {
                row,
                expected: width,
                found: r.as_ref().len(),
            });
        }
        Self::new(
            width,
            rows.len(),
            rows.iter().flat_map(|r| r.as_ref().iter().copied()),
        )
    }

    /// Parses the text layout. Never fails: every character is either
    /// fillable or blocked, and short lines are padded.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines: Vec<Vec<bool>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().map(|c| c == FILLABLE).collect())
            .collect();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        let height = lines.len();

        let mut cells = BitVec::from_elem(width * height, false);
        for (i, line) in lines.iter().enumerate() {
            for (j, &fillable) in line.iter().enumerate() {
                cells.set(i * width + j, fillable);
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Reads the text layout from a buffered reader.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the reader.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    /// Reads the text layout from a file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `(row, col)` lies inside the grid and is fillable.
    #[must_use]
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of fillable cells.
    #[must_use]
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|&c| c).count()
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_fillable(row, col) {
                    write!(f, "{FILLABLE}")?;
                } else {
                    write!(f, "#")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pads_short_lines() {
        let s = Structure::parse("#__\n_\n");
        assert_eq!(s.width(), 3);
        assert_eq!(s.height(), 2);
        assert!(!s.is_fillable(0, 0));
        assert!(s.is_fillable(0, 2));
        assert!(s.is_fillable(1, 0));
        assert!(!s.is_fillable(1, 1));
        assert!(!s.is_fillable(1, 2));
    }

    #[test]
    fn test_parse_empty() {
        let s = Structure::parse("");
        assert_eq!(s.width(), 0);
        assert_eq!(s.height(), 0);
        assert_eq!(s.fillable_count(), 0);
    }

    #[test]
    fn test_parse_strips_carriage_returns() {
        let s = Structure::parse("__\r\n__\r\n");
        assert_eq!(s.width(), 2);
        assert_eq!(s.fillable_count(), 4);
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let s = Structure::parse("__");
        assert!(!s.is_fillable(0, 2));
        assert!(!s.is_fillable(1, 0));
    }

    #[test]
    fn test_new_rejects_dimension_mismatch() {
        let err = Structure::new(2, 2, [true, true, false]).unwrap_err();
        assert_eq!(
            err,
            StructureError::DimensionMismatch {
                width: 2,
                height: 2,
                cells: 3
            }
        );
        assert_eq!(err.to_string(), "grid of 2x2 needs 4 cells, got 3");
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = [vec![true, true], vec![true]];
        let err = Structure::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            StructureError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_matches_parse() {
        let rows = [[false, true, true], [true, false, true]];
        let s = Structure::from_rows(&rows).unwrap();
        assert_eq!(s, Structure::parse("#__\n_#_"));
    }

    #[test]
    fn test_display_round_trips_layout() {
        let text = "#___#\n#_##_\n";
        assert_eq!(Structure::parse(text).to_string(), text);
    }
}
