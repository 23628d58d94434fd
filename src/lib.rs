//! 4DOWN
//!
//! A 4×4 word-square puzzle: every row and every column is a word. The crate
//! generates grids with a prefix-pruned backtracking search and plays them in the
//! terminal with Wordle-style per-cell feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use four_down::generator::{Generator, GeneratorConfig};
//! use four_down::wordlists::{EASY, loader::words_from_slice};
//!
//! let words = words_from_slice(EASY);
//! let generator = Generator::new(GeneratorConfig::default().with_seed(7));
//!
//! let solution = generator.generate(&words).unwrap();
//! for row in solution.rows() {
//!     println!("{row}");
//! }
//! assert!(solution.is_valid_for(&words));
//! ```

// Core domain types
pub mod core;

// Candidate and prefix lookup
pub mod index;

// Grid generation
pub mod generator;

// Player-facing game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
