//! Puzzle generation
//!
//! Each attempt filters the word list to the grid length, shuffles a private copy,
//! builds a fresh [`WordIndex`] and runs the backtracking [`search`]. Attempts are
//! repeated with new shuffles up to the configured budget.

mod config;
mod search;

pub use config::{DEFAULT_ATTEMPTS, GRID_SIZE, GeneratorConfig};
pub use search::{SearchOutcome, SearchStats, search};

use crate::core::{Solution, Word};
use crate::index::{WordIndex, filter_by_length};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Generate an `n`×`n` puzzle with the default attempt budget
///
/// Returns `None` if no grid was found, which is an expected outcome for small or
/// sparse word lists. `words` is never modified.
///
/// # Examples
/// ```
/// use four_down::generator::generate;
/// use four_down::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["card", "area", "rear", "dart", "bath", "horn"]);
/// let solution = generate(4, &words).unwrap();
/// assert_eq!(solution.row(0).text(), "CARD");
///
/// assert!(generate(4, &[]).is_none());
/// ```
#[must_use]
pub fn generate(n: usize, words: &[Word]) -> Option<Solution> {
    Generator::new(GeneratorConfig::new(n)).generate(words)
}

/// Summary of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub solution: Option<Solution>,
    /// Attempts actually made (at most `max_attempts`)
    pub attempts: usize,
    /// Search counters summed over all attempts
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Puzzle generator with a retry budget
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a puzzle, or `None` once the attempt budget is spent
    #[must_use]
    pub fn generate(&self, words: &[Word]) -> Option<Solution> {
        self.generate_with_report(words).solution
    }

    /// Generate a puzzle and report how the search went
    ///
    /// Uses a seeded RNG when the config has a seed, so the result is reproducible.
    #[must_use]
    pub fn generate_with_report(&self, words: &[Word]) -> GenerationReport {
        match self.config.seed {
            Some(seed) => self.generate_with_rng(words, &mut StdRng::seed_from_u64(seed)),
            None => self.generate_with_rng(words, &mut rand::rng()),
        }
    }

    /// Generate a puzzle using the given RNG for shuffling
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        words: &[Word],
        rng: &mut R,
    ) -> GenerationReport {
        let start = Instant::now();
        let mut stats = SearchStats::default();
        let mut solution = None;
        let mut attempts = 0;

        while attempts < self.config.max_attempts {
            attempts += 1;
            let (outcome, attempt_stats) = self.attempt(words, rng);
            stats.merge(attempt_stats);

            log::debug!(
                "Attempt {attempts}/{}: {} placements, {} backtracks",
                self.config.max_attempts,
                attempt_stats.placements,
                attempt_stats.backtracks
            );

            match outcome {
                SearchOutcome::Found(found) => {
                    solution = Some(found);
                    break;
                }
                SearchOutcome::Exhausted => {
                    log::trace!("Attempt {attempts} exhausted every candidate");
                }
                SearchOutcome::StepLimit => {
                    log::trace!("Attempt {attempts} hit the placement cap, reshuffling");
                }
            }
        }

        if solution.is_none() {
            log::warn!(
                "No {n}x{n} grid found after {attempts} attempts",
                n = self.config.size
            );
        }

        GenerationReport {
            solution,
            attempts,
            stats,
            duration: start.elapsed(),
        }
    }

    /// Run a single attempt with a fresh shuffle
    pub fn attempt<R: Rng + ?Sized>(
        &self,
        words: &[Word],
        rng: &mut R,
    ) -> (SearchOutcome, SearchStats) {
        let n = self.config.size;
        if n == 0 {
            return (SearchOutcome::Exhausted, SearchStats::default());
        }

        let mut candidates = filter_by_length(words, n);
        candidates.shuffle(rng);
        let index = WordIndex::new(candidates, n);

        log::trace!(
            "Searching {} candidates ({} prefixes)",
            index.len(),
            index.prefixes().len()
        );
        search(&index, self.config.max_steps)
    }
}
