//! Formatting utilities for terminal output

use crate::core::CellStatus;
use crate::game::GameState;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Emoji used for a cell with no letter
pub const EMPTY_EMOJI: char = '⬛';

/// Format one grid row as emoji feedback
#[must_use]
pub fn row_to_emoji(game: &GameState, row: usize) -> String {
    (0..game.size())
        .map(|col| {
            game.cell(row, col)
                .status
                .map_or(EMPTY_EMOJI, CellStatus::emoji)
        })
        .collect()
}

/// Format the whole grid as emoji feedback, one line per row
#[must_use]
pub fn grid_to_emoji(game: &GameState) -> String {
    (0..game.size())
        .map(|row| row_to_emoji(game, row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
