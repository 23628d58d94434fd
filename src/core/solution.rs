//! Solved word square
//!
//! A `Solution` holds the row words chosen by the generator together with the
//! column words read top to bottom.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// An N×N grid whose rows and columns are words
///
/// `cols[j]` is always the j-th letter of every row, read top to bottom, so
/// `col(j).letter(i) == row(i).letter(j)` for every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    rows: Vec<Word>,
    cols: Vec<Word>,
}

/// Rows that cannot form a square grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("A grid needs at least one row")]
    Empty,
    #[error("Row {row} has {len} letters, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl Solution {
    /// Build a solution from its rows, deriving the columns
    ///
    /// Only the shape is checked here; word-list membership and distinctness are
    /// checked by [`Solution::is_valid_for`].
    ///
    /// # Errors
    /// Returns `ShapeError` if there are no rows or a row's length differs from the
    /// number of rows.
    ///
    /// # Examples
    /// ```
    /// use four_down::core::{Solution, Word};
    ///
    /// let rows = ["pond", "area", "scar", "tart"].map(|w| Word::new(w).unwrap());
    /// let solution = Solution::from_rows(rows.to_vec()).unwrap();
    /// assert_eq!(solution.col(0).text(), "PAST");
    /// assert_eq!(solution.letter(2, 1), 'C');
    /// ```
    pub fn from_rows(rows: Vec<Word>) -> Result<Self, ShapeError> {
        let n = rows.len();
        if n == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, word)) = rows.iter().enumerate().find(|(_, w)| w.len() != n) {
            return Err(ShapeError::RowLength {
                row,
                len: word.len(),
                expected: n,
            });
        }
        let cols = derive_columns(&rows);
        Ok(Self { rows, cols })
    }

    /// Assemble a solution from rows and columns the search already derived.
    pub(crate) fn from_parts(rows: Vec<Word>, cols: Vec<Word>) -> Self {
        debug_assert_eq!(cols, derive_columns(&rows));
        Self { rows, cols }
    }

    /// Grid size N
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Word] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> &[Word] {
        &self.cols
    }

    /// # Panics
    /// Panics if `row >= self.size()`
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &Word {
        &self.rows[row]
    }

    /// # Panics
    /// Panics if `col >= self.size()`
    #[inline]
    #[must_use]
    pub fn col(&self, col: usize) -> &Word {
        &self.cols[col]
    }

    /// The solution letter at a cell
    ///
    /// # Panics
    /// Panics if either coordinate is out of range
    #[inline]
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> char {
        self.rows[row].letter(col)
    }

    /// Total occurrences of a letter across the grid
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.rows.iter().map(|w| w.count_of(letter)).sum()
    }

    /// Check every grid invariant against a word list
    ///
    /// True iff rows and columns are all members of `words` (restricted to words of
    /// the grid's length) and neither axis repeats a word. A word may still appear
    /// once as a row and once as a column.
    #[must_use]
    pub fn is_valid_for(&self, words: &[Word]) -> bool {
        let n = self.size();
        let vocabulary: FxHashSet<&str> = words
            .iter()
            .filter(|w| w.len() == n)
            .map(Word::text)
            .collect();

        let members = self
            .rows
            .iter()
            .chain(&self.cols)
            .all(|w| vocabulary.contains(w.text()));

        members && all_distinct(&self.rows) && all_distinct(&self.cols)
    }
}

/// Read column `j` of every row for `j` in `0..n`.
fn derive_columns(rows: &[Word]) -> Vec<Word> {
    let n = rows.len();
    (0..n)
        .map(|j| {
            let letters: Vec<char> = rows.iter().map(|row| row.letter(j)).collect();
            Word::from_letters(&letters)
        })
        .collect()
}

pub(crate) fn all_distinct(words: &[Word]) -> bool {
    let mut seen = FxHashSet::default();
    words.iter().all(|w| seen.insert(w.text()))
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let spaced: Vec<String> = row.letters().iter().map(char::to_string).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn columns_are_transpose_of_rows() {
        let solution = Solution::from_rows(words(&["pond", "area", "scar", "tart"])).unwrap();

        let cols: Vec<&str> = solution.cols().iter().map(Word::text).collect();
        assert_eq!(cols, ["PAST", "ORCA", "NEAR", "DART"]);

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(solution.col(j).letter(i), solution.row(i).letter(j));
            }
        }
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(Solution::from_rows(vec![]), Err(ShapeError::Empty));
        assert_eq!(
            Solution::from_rows(words(&["card", "are", "rear", "dart"])),
            Err(ShapeError::RowLength {
                row: 1,
                len: 3,
                expected: 4
            })
        );
        assert!(Solution::from_rows(words(&["card", "area", "rear"])).is_err());
    }

    #[test]
    fn symmetric_square_is_valid() {
        let list = words(&["card", "area", "rear", "dart"]);
        let solution = Solution::from_rows(list.clone()).unwrap();
        assert_eq!(solution.rows(), solution.cols());
        assert!(solution.is_valid_for(&list));
    }

    #[test]
    fn invalid_when_column_missing() {
        let list = words(&["pond", "area", "scar", "tart", "past", "orca", "near"]);
        let solution = Solution::from_rows(words(&["pond", "area", "scar", "tart"])).unwrap();
        assert!(!solution.is_valid_for(&list));
    }

    #[test]
    fn invalid_when_rows_repeat() {
        let list = words(&["aaaa"]);
        let solution = Solution::from_rows(words(&["aaaa", "aaaa", "aaaa", "aaaa"])).unwrap();
        assert!(!solution.is_valid_for(&list));
    }

    #[test]
    fn letter_counts() {
        let solution = Solution::from_rows(words(&["card", "area", "rear", "dart"])).unwrap();
        assert_eq!(solution.count_of('A'), 5);
        assert_eq!(solution.count_of('R'), 5);
        assert_eq!(solution.count_of('Z'), 0);
    }

    #[test]
    fn display_grid() {
        let solution = Solution::from_rows(words(&["ab", "ba"])).unwrap();
        assert_eq!(solution.to_string(), "A B\nB A\n");
    }
}
