#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint engine: domains, arc consistency, assignments, search
//! heuristics and the solvers built from them.

pub mod arc_consistency;
pub mod assignment;
pub mod backtracking;
pub mod domain;
pub mod parallel;
pub mod solver;
pub mod value_ordering;
pub mod variable_selection;
