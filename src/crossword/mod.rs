#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The puzzle side: grid layout, word list, the variables and overlaps derived
//! from the grid, and text rendering of filled grids.

pub mod puzzle;
pub mod render;
pub mod structure;
pub mod variable;
pub mod vocabulary;
