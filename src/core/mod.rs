//! Core domain types for the word square
//!
//! Words, solved grids and letter feedback. Everything here is pure and independent
//! of how a puzzle is generated or displayed.

mod feedback;
mod solution;
mod word;

pub use feedback::{CellStatus, letter_statuses};
pub use solution::{ShapeError, Solution};
pub use word::{Word, WordError};

pub(crate) use solution::all_distinct;
