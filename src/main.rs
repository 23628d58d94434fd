//! 4DOWN - CLI
//!
//! Word-square puzzle with a TUI game, a line-based game and generator tools.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use four_down::{
    commands::{run_benchmark, run_generate, run_simple},
    core::Word,
    generator::{DEFAULT_ATTEMPTS, GRID_SIZE, GeneratorConfig},
    logging,
    output::{print_benchmark_result, print_generate_result},
    wordlists::{Difficulty, WordSource, load_words},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "four_down",
    about = "4DOWN: fill a word square where every row and every column is a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default, 5 hints), medium (3 hints), hard (1 hint)
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Custom word list (one word per line) instead of the difficulty's list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Grid side length
    #[arg(long, global = true, default_value_t = GRID_SIZE)]
    size: usize,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fresh-shuffle attempts before giving up
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Cap on row placements per attempt (default: search each shuffle fully)
    #[arg(long, global = true)]
    max_steps: Option<usize>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (line-based, no TUI)
    Simple,

    /// Generate and print one puzzle
    Generate,

    /// Benchmark the generator
    Bench {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn generator_config(cli: &Cli) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(cli.size).with_attempts(cli.attempts);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_steps) = cli.max_steps {
        config = config.with_max_steps(max_steps);
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines would corrupt the alternate screen
    let tui = matches!(cli.command, None | Some(Commands::Play));
    logging::init_logger(logging::level_for(cli.verbose, tui));

    let config = generator_config(&cli);
    let source = match &cli.wordlist {
        Some(path) => WordSource::File(path.clone()),
        None => WordSource::Embedded(cli.difficulty),
    };
    let words = load_words(&source).with_context(|| format!("Failed to load {source}"))?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(source, words, config, cli.difficulty),
        Commands::Simple => run_simple(config, &words, cli.difficulty),
        Commands::Generate => run_generate_command(config, &words),
        Commands::Bench { count } => {
            run_bench_command(config, &words, count, &source);
            Ok(())
        }
    }
}

fn run_generate_command(config: GeneratorConfig, words: &[Word]) -> Result<()> {
    let result = run_generate(config, words);
    print_generate_result(&result);

    if result.report.solution.is_none() {
        bail!(
            "No {n}x{n} grid found in {} attempts",
            result.report.attempts,
            n = config.size
        );
    }
    Ok(())
}

fn run_bench_command(
    config: GeneratorConfig,
    words: &[Word],
    count: usize,
    source: &WordSource,
) {
    println!(
        "Generating {count} puzzles from {source} ({} words)...",
        words.len()
    );
    let result = run_benchmark(config, words, count, true);
    print_benchmark_result(&result);
}

fn run_play_command(
    source: WordSource,
    words: Vec<Word>,
    config: GeneratorConfig,
    difficulty: Difficulty,
) -> Result<()> {
    use four_down::interactive::{App, run_tui};

    let app = App::new(source, words, config, difficulty)?;
    run_tui(app)
}
