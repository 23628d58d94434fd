//! Display functions for the game and command results

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, grid_to_emoji};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::{CellStatus, Solution, Word};
use crate::game::{Cell, GameState};
use colored::{ColoredString, Colorize};

fn paint(text: &str, status: Option<CellStatus>) -> ColoredString {
    match status {
        Some(CellStatus::Correct) => text.black().on_green().bold(),
        Some(CellStatus::Present) => text.black().on_yellow().bold(),
        Some(CellStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

fn cell_text(cell: &Cell, selected: bool) -> String {
    let letter = cell.value.unwrap_or('·');
    if selected {
        format!("[{letter}]")
    } else {
        format!(" {letter} ")
    }
}

/// Print the player's grid with per-cell colors
pub fn print_grid(game: &GameState) {
    let n = game.size();
    println!();
    for row in 0..n {
        let line: Vec<String> = (0..n)
            .map(|col| {
                let cell = game.cell(row, col);
                let selected = game.cursor() == Some((row, col));
                paint(&cell_text(cell, selected), cell.status).to_string()
            })
            .collect();
        println!("   {}   {}", row + 1, line.join(" "));
    }
    let header: Vec<String> = (1..=n).map(|col| format!(" {col} ")).collect();
    println!("       {}", header.join(" ").bright_black());
}

/// Print the keyboard colored by letter status
pub fn print_keyboard(game: &GameState) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|key| {
                let status = game.letter_status().get(&key).copied();
                paint(&key.to_string(), status).to_string()
            })
            .collect();
        println!("   {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print guess and hint counters
pub fn print_status(game: &GameState) {
    println!(
        "\n   Guesses: {}   Hints: {}   Difficulty: {}",
        game.guess_count().to_string().bright_cyan().bold(),
        game.hints_remaining().to_string().bright_yellow(),
        game.difficulty()
    );
}

/// Print the celebration banner with the share text
pub fn print_win(game: &GameState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "        🎉  4 D O W N   S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n{}\n", grid_to_emoji(game));
    println!("{}", game.share_text().bright_white());
    println!("\n{}", "═".repeat(60).bright_cyan());
}

fn join_words(words: &[Word]) -> String {
    words.iter().map(Word::text).collect::<Vec<_>>().join(" ")
}

/// Print a solution grid with its rows and columns
pub fn print_solution(solution: &Solution) {
    for row in solution.rows() {
        let letters: Vec<String> = row.letters().iter().map(char::to_string).collect();
        println!("   {}", letters.join(" ").bright_green().bold());
    }
    println!("\n   Across: {}", join_words(solution.rows()).bright_white());
    println!("   Down:   {}", join_words(solution.cols()).bright_white());
}

/// Print the result of the generate command
pub fn print_generate_result(result: &GenerateResult) {
    let report = &result.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD SQUARE".bright_cyan().bold());
    println!("{}\n", "═".repeat(60).cyan());

    match &report.solution {
        Some(solution) => print_solution(solution),
        None => println!("{}", "❌ No grid found".red().bold()),
    }

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Candidates:       {}", result.candidates);
    println!("   Attempts:         {}", report.attempts);
    println!("   Placements:       {}", report.stats.placements);
    println!("   Backtracks:       {}", report.stats.backtracks);
    println!("   Rejected grids:   {}", report.stats.rejected_grids);
    println!("   Time taken:       {:.2}ms", report.duration.as_secs_f64() * 1000.0);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let rate = result.success_rate();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Generations:      {}", result.runs);
    println!(
        "   Success rate:     [{}] {}",
        create_progress_bar(rate, 100.0, 20).green(),
        format!("{rate:.1}%").bright_yellow().bold()
    );
    println!("   Average attempts: {:.2}", result.average_attempts());
    println!("   Avg placements:   {:.1}", result.average_placements());
    println!("   Total backtracks: {}", result.total_backtracks);
    println!(
        "   Slowest:          {:.2}ms",
        result.slowest.as_secs_f64() * 1000.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.per_second());
}
