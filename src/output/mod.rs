//! Terminal output formatting
//!
//! Colored grid, keyboard and result printing for the line-based front-end and
//! the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_generate_result, print_grid, print_keyboard, print_solution,
    print_status, print_win,
};
