//! Command implementations

pub mod bench;
pub mod generate;
pub mod simple;

pub use bench::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateResult, new_game, run_generate};
pub use simple::run_simple;
