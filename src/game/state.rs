//! Player-facing puzzle state

use super::cursor::{self, Direction};
use crate::core::{CellStatus, Solution, letter_statuses};
use crate::wordlists::Difficulty;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from player input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// A single grid cell as the player sees it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub value: Option<char>,
    pub status: Option<CellStatus>,
    /// Set once the value is correct; locked cells can't be edited
    pub locked: bool,
}

/// What an input did, for the front-end to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Correct,
    Present,
    Absent,
    /// Input hit a locked cell
    Locked,
    Cleared,
    Moved,
    /// The input completed the grid
    Solved,
    Ignored,
}

impl From<CellStatus> for Move {
    fn from(status: CellStatus) -> Self {
        match status {
            CellStatus::Absent => Self::Absent,
            CellStatus::Present => Self::Present,
            CellStatus::Correct => Self::Correct,
        }
    }
}

/// State of one game: the hidden solution plus everything the player has done
#[derive(Debug, Clone)]
pub struct GameState {
    solution: Solution,
    difficulty: Difficulty,
    cells: Vec<Cell>,
    cursor: Option<(usize, usize)>,
    guess_count: usize,
    hints_remaining: usize,
    solved: bool,
    letter_status: BTreeMap<char, CellStatus>,
}

impl GameState {
    /// Start a game on `solution` with the hint budget of `difficulty`
    ///
    /// # Examples
    /// ```
    /// use four_down::core::{Solution, Word};
    /// use four_down::game::{GameState, Move};
    /// use four_down::wordlists::Difficulty;
    ///
    /// let rows = ["pond", "area", "scar", "tart"].map(|w| Word::new(w).unwrap());
    /// let solution = Solution::from_rows(rows.to_vec()).unwrap();
    /// let mut game = GameState::new(solution, Difficulty::Easy);
    ///
    /// assert_eq!(game.type_letter('p'), Ok(Move::Correct));
    /// assert_eq!(game.cursor(), Some((0, 1)));
    /// assert_eq!(game.guess_count(), 1);
    /// ```
    #[must_use]
    pub fn new(solution: Solution, difficulty: Difficulty) -> Self {
        let n = solution.size();
        Self {
            solution,
            difficulty,
            cells: vec![Cell::default(); n * n],
            cursor: Some((0, 0)),
            guess_count: 0,
            hints_remaining: difficulty.max_hints(),
            solved: false,
            letter_status: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.solution.size()
    }

    /// # Panics
    /// Panics if `row` or `col` is outside the grid
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.size() + col]
    }

    #[must_use]
    pub const fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> usize {
        self.hints_remaining
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Keyboard status of every letter used so far
    #[must_use]
    pub const fn letter_status(&self) -> &BTreeMap<char, CellStatus> {
        &self.letter_status
    }

    /// Type a letter into the cursor cell
    ///
    /// # Errors
    /// Returns [`GameError::NotALetter`] for non-alphabetic input
    pub fn type_letter(&mut self, ch: char) -> Result<Move, GameError> {
        if !ch.is_alphabetic() {
            return Err(GameError::NotALetter(ch));
        }
        let Some((row, col)) = self.cursor else {
            return Ok(Move::Ignored);
        };
        if self.solved {
            return Ok(Move::Ignored);
        }
        if self.cell(row, col).locked {
            return Ok(Move::Locked);
        }

        let letter = ch.to_uppercase().next().unwrap_or(ch);
        self.guess_count += 1;
        let status = self.set_value(row, col, Some(letter));

        if self.check_win() {
            return Ok(Move::Solved);
        }
        self.cursor = self.next_open_cell(row, col);
        Ok(status.map_or(Move::Ignored, Move::from))
    }

    /// Backspace: clear the cursor cell, or step back and clear the previous one
    pub fn delete(&mut self) -> Move {
        if self.solved {
            return Move::Ignored;
        }
        let Some((row, col)) = self.cursor else {
            return Move::Ignored;
        };

        let cell = *self.cell(row, col);
        if cell.value.is_some() {
            if cell.locked {
                return Move::Ignored;
            }
            self.set_value(row, col, None);
            return Move::Cleared;
        }

        let Some((prev_row, prev_col)) = cursor::prev_cell((row, col), self.size()) else {
            return Move::Ignored;
        };
        self.cursor = Some((prev_row, prev_col));
        let prev = *self.cell(prev_row, prev_col);
        if prev.locked || prev.value.is_none() {
            return Move::Moved;
        }
        self.set_value(prev_row, prev_col, None);
        Move::Cleared
    }

    /// Move the cursor to the start of the next row
    pub fn enter(&mut self) -> Move {
        if self.solved {
            return Move::Ignored;
        }
        match self.cursor {
            Some((row, _)) if row + 1 < self.size() => {
                self.cursor = Some((row + 1, 0));
                Move::Moved
            }
            _ => Move::Ignored,
        }
    }

    /// Arrow-key navigation; stays put at the edge of the grid
    pub fn move_cursor(&mut self, direction: Direction) -> Move {
        let Some(position) = self.cursor else {
            return Move::Ignored;
        };
        match cursor::step(position, direction, self.size()) {
            Some(next) => {
                self.cursor = Some(next);
                Move::Moved
            }
            None => Move::Ignored,
        }
    }

    /// Select a cell directly
    ///
    /// # Errors
    /// Returns [`GameError::OutOfBounds`] if the cell is outside the grid
    pub fn focus(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(GameError::OutOfBounds { row, col, size });
        }
        self.cursor = Some((row, col));
        Ok(())
    }

    /// Reveal one random incorrect cell
    ///
    /// Returns the revealed cell, or `None` when no hints remain, the game is over
    /// or every cell is already correct. Hints don't count as guesses.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.solved || self.hints_remaining == 0 {
            return None;
        }

        let n = self.size();
        let incorrect: Vec<(usize, usize)> = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cell(row, col).value != Some(self.solution.letter(row, col)))
            .collect();
        let &(row, col) = incorrect.choose(rng)?;

        self.set_value(row, col, Some(self.solution.letter(row, col)));
        self.cursor = Some((row, col));
        self.hints_remaining -= 1;
        log::debug!("Hint revealed ({row}, {col}), {} left", self.hints_remaining);

        self.check_win();
        Some((row, col))
    }

    /// Text to share after solving
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "I solved 4DOWN in {} guesses! 🧩\n\nTry it yourself!",
            self.guess_count
        )
    }

    /// Set a cell's value, re-evaluate it and refresh the keyboard map.
    fn set_value(&mut self, row: usize, col: usize, value: Option<char>) -> Option<CellStatus> {
        let status = value.map(|letter| CellStatus::evaluate(&self.solution, row, col, letter));
        let index = row * self.size() + col;
        self.cells[index] = Cell {
            value,
            status,
            locked: status == Some(CellStatus::Correct),
        };
        self.refresh_keyboard();
        status
    }

    fn refresh_keyboard(&mut self) {
        let n = self.size();
        let filled = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.value.map(|letter| (i / n, i % n, letter)));
        self.letter_status = letter_statuses(&self.solution, filled, &self.letter_status);
    }

    fn check_win(&mut self) -> bool {
        let n = self.size();
        self.solved = self
            .cells
            .iter()
            .enumerate()
            .all(|(i, cell)| cell.value == Some(self.solution.letter(i / n, i % n)));
        if self.solved {
            log::debug!("Solved in {} guesses", self.guess_count);
        }
        self.solved
    }

    /// Next non-locked cell after (row, col) in reading order.
    fn next_open_cell(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let n = self.size();
        std::iter::successors(cursor::next_cell((row, col), n), |&pos| cursor::next_cell(pos, n))
            .find(|&(r, c)| !self.cell(r, c).locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pond() -> Solution {
        let rows = ["pond", "area", "scar", "tart"].map(|w| Word::new(w).unwrap());
        Solution::from_rows(rows.to_vec()).unwrap()
    }

    fn game() -> GameState {
        GameState::new(pond(), Difficulty::Easy)
    }

    fn type_word(game: &mut GameState, word: &str) {
        for ch in word.chars() {
            game.type_letter(ch).unwrap();
        }
    }

    #[test]
    fn new_game_starts_at_origin() {
        let game = game();
        assert_eq!(game.cursor(), Some((0, 0)));
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.hints_remaining(), 5);
        assert!(!game.is_solved());
        assert!(game.letter_status().is_empty());
    }

    #[test]
    fn hint_budget_follows_difficulty() {
        assert_eq!(GameState::new(pond(), Difficulty::Medium).hints_remaining(), 3);
        assert_eq!(GameState::new(pond(), Difficulty::Hard).hints_remaining(), 1);
    }

    #[test]
    fn typing_evaluates_and_advances() {
        let mut game = game();
        assert_eq!(game.type_letter('s'), Ok(Move::Present));
        assert_eq!(game.cell(0, 0).value, Some('S'));
        assert!(!game.cell(0, 0).locked);
        assert_eq!(game.cursor(), Some((0, 1)));

        assert_eq!(game.type_letter('z'), Ok(Move::Absent));
        assert_eq!(game.type_letter('N'), Ok(Move::Correct));
        assert!(game.cell(0, 2).locked);
        assert_eq!(game.guess_count(), 3);
    }

    #[test]
    fn typing_skips_locked_cells() {
        let mut game = game();
        game.focus(0, 1).unwrap();
        game.type_letter('o').unwrap();
        game.focus(0, 0).unwrap();
        game.type_letter('x').unwrap();
        assert_eq!(game.cursor(), Some((0, 2)));
    }

    #[test]
    fn typing_on_locked_cell_shakes() {
        let mut game = game();
        game.type_letter('p').unwrap();
        game.focus(0, 0).unwrap();
        assert_eq!(game.type_letter('q'), Ok(Move::Locked));
        assert_eq!(game.cell(0, 0).value, Some('P'));
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn typing_rejects_non_letters() {
        let mut game = game();
        assert_eq!(game.type_letter('3'), Err(GameError::NotALetter('3')));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn cursor_clears_when_no_open_cell_follows() {
        let mut game = game();
        game.focus(3, 3).unwrap();
        game.type_letter('x').unwrap();
        assert_eq!(game.cursor(), None);
        assert_eq!(game.type_letter('a'), Ok(Move::Ignored));
    }

    #[test]
    fn typing_whole_grid_solves() {
        let mut game = game();
        type_word(&mut game, "pondareascar");
        type_word(&mut game, "tar");
        assert_eq!(game.type_letter('t'), Ok(Move::Solved));
        assert!(game.is_solved());
        assert_eq!(game.guess_count(), 16);
        assert_eq!(game.type_letter('a'), Ok(Move::Ignored));
        assert_eq!(game.delete(), Move::Ignored);
    }

    #[test]
    fn delete_clears_current_cell() {
        let mut game = game();
        game.type_letter('x').unwrap();
        game.focus(0, 0).unwrap();
        assert_eq!(game.delete(), Move::Cleared);
        assert_eq!(*game.cell(0, 0), Cell::default());
        assert_eq!(game.cursor(), Some((0, 0)));
    }

    #[test]
    fn delete_on_empty_cell_clears_previous() {
        let mut game = game();
        type_word(&mut game, "xy");
        assert_eq!(game.cursor(), Some((0, 2)));
        assert_eq!(game.delete(), Move::Cleared);
        assert_eq!(game.cursor(), Some((0, 1)));
        assert_eq!(game.cell(0, 1).value, None);
        assert_eq!(game.cell(0, 0).value, Some('X'));
    }

    #[test]
    fn delete_never_clears_locked_cells() {
        let mut game = game();
        game.type_letter('p').unwrap();
        assert_eq!(game.delete(), Move::Moved);
        assert_eq!(game.cursor(), Some((0, 0)));
        assert_eq!(game.cell(0, 0).value, Some('P'));
        assert_eq!(game.delete(), Move::Ignored);
    }

    #[test]
    fn delete_at_origin_does_nothing() {
        let mut game = game();
        assert_eq!(game.delete(), Move::Ignored);
        assert_eq!(game.cursor(), Some((0, 0)));
    }

    #[test]
    fn enter_moves_to_next_row() {
        let mut game = game();
        game.focus(1, 2).unwrap();
        assert_eq!(game.enter(), Move::Moved);
        assert_eq!(game.cursor(), Some((2, 0)));
        game.focus(3, 1).unwrap();
        assert_eq!(game.enter(), Move::Ignored);
        assert_eq!(game.cursor(), Some((3, 1)));
    }

    #[test]
    fn arrows_are_clamped() {
        let mut game = game();
        assert_eq!(game.move_cursor(Direction::Up), Move::Ignored);
        assert_eq!(game.move_cursor(Direction::Down), Move::Moved);
        assert_eq!(game.move_cursor(Direction::Right), Move::Moved);
        assert_eq!(game.cursor(), Some((1, 1)));
    }

    #[test]
    fn focus_out_of_bounds() {
        let mut game = game();
        assert_eq!(
            game.focus(4, 0),
            Err(GameError::OutOfBounds {
                row: 4,
                col: 0,
                size: 4
            })
        );
        assert_eq!(game.cursor(), Some((0, 0)));
    }

    #[test]
    fn hint_reveals_incorrect_cell() {
        let mut game = game();
        let mut rng = StdRng::seed_from_u64(5);

        let (row, col) = game.hint(&mut rng).unwrap();
        let cell = game.cell(row, col);
        assert_eq!(cell.value, Some(game.solution().letter(row, col)));
        assert!(cell.locked);
        assert_eq!(game.cursor(), Some((row, col)));
        assert_eq!(game.hints_remaining(), 4);
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn hint_budget_runs_out() {
        let mut game = GameState::new(pond(), Difficulty::Hard);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(game.hint(&mut rng).is_some());
        assert!(game.hint(&mut rng).is_none());
        assert_eq!(game.hints_remaining(), 0);
    }

    #[test]
    fn hint_can_finish_the_puzzle() {
        let mut game = game();
        type_word(&mut game, "pondareascartar");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(game.hint(&mut rng), Some((3, 3)));
        assert!(game.is_solved());
        assert!(game.hint(&mut rng).is_none());
    }

    #[test]
    fn keyboard_tracks_used_letters() {
        let mut game = game();
        type_word(&mut game, "zs");
        assert_eq!(game.letter_status().get(&'Z'), Some(&CellStatus::Absent));
        assert_eq!(game.letter_status().get(&'S'), Some(&CellStatus::Present));

        // P occurs once, at (0, 0)
        game.focus(0, 0).unwrap();
        game.type_letter('p').unwrap();
        assert_eq!(game.letter_status().get(&'P'), Some(&CellStatus::Correct));
    }

    #[test]
    fn share_text_counts_guesses() {
        let mut game = game();
        type_word(&mut game, "xyz");
        assert_eq!(
            game.share_text(),
            "I solved 4DOWN in 3 guesses! 🧩\n\nTry it yourself!"
        );
    }
}
