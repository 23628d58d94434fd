//! Cursor movement on the grid

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Move one cell in a direction, or `None` at the edge of the grid.
pub(crate) fn step((row, col): (usize, usize), direction: Direction, size: usize) -> Option<(usize, usize)> {
    match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => (row + 1 < size).then_some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => (col + 1 < size).then_some((row, col + 1)),
    }
}

/// Following cell in reading order (left to right, then down).
pub(crate) fn next_cell((row, col): (usize, usize), size: usize) -> Option<(usize, usize)> {
    if col + 1 < size {
        Some((row, col + 1))
    } else if row + 1 < size {
        Some((row + 1, 0))
    } else {
        None
    }
}

/// Preceding cell in reading order.
pub(crate) fn prev_cell((row, col): (usize, usize), size: usize) -> Option<(usize, usize)> {
    if col > 0 {
        Some((row, col - 1))
    } else if row > 0 {
        Some((row - 1, size - 1))
    } else {
        None
    }
}
