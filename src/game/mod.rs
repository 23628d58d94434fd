//! Game model shared by the front-ends
//!
//! [`GameState`] owns the hidden solution, the player's grid, the cursor and the
//! keyboard map. Every input returns a [`Move`] so a renderer knows what changed.

mod cursor;
mod state;

pub use cursor::Direction;
pub use state::{Cell, GameError, GameState, Move};
