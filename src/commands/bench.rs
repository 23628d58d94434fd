//! Benchmark command
//!
//! Runs many independent generations in parallel and summarizes them.

use crate::core::Word;
use crate::generator::{GenerationReport, Generator, GeneratorConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResult {
    pub runs: usize,
    pub successes: usize,
    pub total_attempts: usize,
    pub total_placements: usize,
    pub total_backtracks: usize,
    /// Slowest single generation
    pub slowest: Duration,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        ratio(self.successes, self.runs) * 100.0
    }

    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        ratio(self.total_attempts, self.runs)
    }

    #[must_use]
    pub fn average_placements(&self) -> f64 {
        ratio(self.total_placements, self.runs)
    }

    #[must_use]
    pub fn per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 { self.runs as f64 / secs } else { 0.0 }
    }

    fn record(&mut self, report: &GenerationReport) {
        self.runs += 1;
        if report.solution.is_some() {
            self.successes += 1;
        }
        self.total_attempts += report.attempts;
        self.total_placements += report.stats.placements;
        self.total_backtracks += report.stats.backtracks;
        self.slowest = self.slowest.max(report.duration);
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Config for run `i`: seeded runs use `seed + i` so each one is reproducible.
fn run_config(config: GeneratorConfig, i: usize) -> GeneratorConfig {
    match config.seed {
        Some(seed) => config.with_seed(seed.wrapping_add(i as u64)),
        None => config,
    }
}

/// Run `count` generations in parallel
pub fn run_benchmark(
    config: GeneratorConfig,
    words: &[Word],
    count: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let reports: Vec<GenerationReport> = (0..count)
        .into_par_iter()
        .map(|i| {
            let report = Generator::new(run_config(config, i)).generate_with_report(words);
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut result = reports.iter().fold(BenchmarkResult::default(), |mut acc, report| {
        acc.record(report);
        acc
    });
    result.duration = start.elapsed();

    log::debug!(
        "Benchmark: {}/{} grids in {:.2}s",
        result.successes,
        result.runs,
        result.duration.as_secs_f64()
    );
    result
}
