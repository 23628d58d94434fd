//! Word lists for puzzle generation
//!
//! Provides the embedded difficulty lists and loaders for custom lists.

mod difficulty;
mod embedded;
pub mod loader;

pub use difficulty::Difficulty;
pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use loader::{LoadError, WordSource, load_words};
