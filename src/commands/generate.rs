//! Generate command
//!
//! Builds a single puzzle and hands the report to the printer.

use crate::core::Word;
use crate::game::GameState;
use crate::generator::{GenerationReport, Generator, GeneratorConfig};
use crate::index::filter_by_length;
use crate::wordlists::Difficulty;
use anyhow::{Context, Result};

/// Result of generating one puzzle
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub report: GenerationReport,
    /// Candidate words of the grid length in the source list
    pub candidates: usize,
}

/// Generate one puzzle from `words`
#[must_use]
pub fn run_generate(config: GeneratorConfig, words: &[Word]) -> GenerateResult {
    let candidates = filter_by_length(words, config.size).len();
    log::debug!("Generating a {n}x{n} grid from {candidates} candidates", n = config.size);

    GenerateResult {
        report: Generator::new(config).generate_with_report(words),
        candidates,
    }
}

/// Generate a puzzle and start a game on it
///
/// # Errors
///
/// Returns an error if no grid is found within the attempt budget.
pub fn new_game(
    config: GeneratorConfig,
    words: &[Word],
    difficulty: Difficulty,
) -> Result<GameState> {
    let solution = Generator::new(config).generate(words).with_context(|| {
        format!(
            "No {n}x{n} puzzle found in {} attempts; try a larger word list",
            config.max_attempts,
            n = config.size
        )
    })?;
    Ok(GameState::new(solution, difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn generate_counts_candidates() {
        let words = words_from_slice(&["card", "area", "rear", "dart", "horns", "a"]);
        let result = run_generate(GeneratorConfig::default().with_seed(1), &words);

        assert_eq!(result.candidates, 4);
        assert!(result.report.solution.is_some());
        assert_eq!(result.report.attempts, 1);
    }

    #[test]
    fn generate_reports_failure() {
        let words = words_from_slice(&["card", "area"]);
        let result = run_generate(GeneratorConfig::default().with_attempts(2), &words);

        assert!(result.report.solution.is_none());
        assert_eq!(result.report.attempts, 2);
    }

    #[test]
    fn new_game_uses_difficulty_hints() {
        let words = words_from_slice(&["card", "area", "rear", "dart"]);
        let game = new_game(GeneratorConfig::default(), &words, Difficulty::Medium).unwrap();

        assert_eq!(game.hints_remaining(), 3);
        assert_eq!(game.solution().row(0).text(), "CARD");
    }

    #[test]
    fn new_game_fails_without_grid() {
        let words = words_from_slice(&["card"]);
        let err = new_game(GeneratorConfig::default(), &words, Difficulty::Easy).unwrap_err();
        assert!(err.to_string().contains("No 4x4 puzzle found"));
    }
}
