//! Per-cell and per-letter feedback
//!
//! Feedback rules for a guessed letter at (row, col):
//! - Correct: the letter is the solution letter of that cell
//! - Present: the letter occurs somewhere in the cell's row word or column word
//! - Absent: otherwise

use super::Solution;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Feedback for a single letter
///
/// Ordered so that `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellStatus {
    Absent,
    Present,
    Correct,
}

impl CellStatus {
    /// Evaluate a guessed letter against the solution
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the grid
    ///
    /// # Examples
    /// ```
    /// use four_down::core::{CellStatus, Solution, Word};
    ///
    /// let rows = ["pond", "area", "scar", "tart"].map(|w| Word::new(w).unwrap());
    /// let solution = Solution::from_rows(rows.to_vec()).unwrap();
    ///
    /// assert_eq!(CellStatus::evaluate(&solution, 0, 0, 'P'), CellStatus::Correct);
    /// // 'S' is not in POND but is in column PAST
    /// assert_eq!(CellStatus::evaluate(&solution, 0, 0, 'S'), CellStatus::Present);
    /// assert_eq!(CellStatus::evaluate(&solution, 0, 0, 'Z'), CellStatus::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(solution: &Solution, row: usize, col: usize, letter: char) -> Self {
        if solution.letter(row, col) == letter {
            Self::Correct
        } else if solution.row(row).contains(letter) || solution.col(col).contains(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Emoji square used when sharing or printing a grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Recompute the keyboard status of every letter the player has used
///
/// `cells` yields `(row, col, letter)` for every filled cell. For each used letter:
/// - Absent if it does not occur in the solution
/// - Correct if every occurrence in the solution is filled in correctly
/// - Present otherwise, unless `previous` already marks it Correct
///
/// Letters missing from `cells` keep their previous status.
pub fn letter_statuses<I>(
    solution: &Solution,
    cells: I,
    previous: &BTreeMap<char, CellStatus>,
) -> BTreeMap<char, CellStatus>
where
    I: IntoIterator<Item = (usize, usize, char)>,
{
    let mut correct_counts: FxHashMap<char, usize> = FxHashMap::default();
    let mut used: Vec<char> = Vec::new();

    for (row, col, letter) in cells {
        if !used.contains(&letter) {
            used.push(letter);
        }
        if solution.letter(row, col) == letter {
            *correct_counts.entry(letter).or_insert(0) += 1;
        }
    }

    let mut statuses = previous.clone();
    for letter in used {
        let total = solution.count_of(letter);
        let placed = correct_counts.get(&letter).copied().unwrap_or(0);

        if total == 0 {
            statuses.insert(letter, CellStatus::Absent);
        } else if placed == total {
            statuses.insert(letter, CellStatus::Correct);
        } else if statuses.get(&letter) != Some(&CellStatus::Correct) {
            statuses.insert(letter, CellStatus::Present);
        }
    }
    statuses
}
