//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Rows and columns are numbered from 1.

use super::generate::new_game;
use crate::core::Word;
use crate::game::{GameError, GameState, Move};
use crate::generator::GeneratorConfig;
use crate::output::{print_grid, print_keyboard, print_status, print_win};
use crate::wordlists::Difficulty;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type one letter into a cell
    Place { row: usize, col: usize, letter: char },
    /// Type a word across a row, skipping solved cells
    Row { row: usize, word: String },
    Hint,
    Show,
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for the list")]
    Unknown(String),
    #[error("'{0}' is not a row or column number (they start at 1)")]
    BadNumber(String),
    #[error("Expected a single letter, got '{0}'")]
    BadLetter(String),
}

fn parse_index(token: &str) -> Result<usize, CommandError> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandError::BadNumber(token.to_string()))
}

fn parse_letter(token: &str) -> Result<char, CommandError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(CommandError::BadLetter(token.to_string())),
    }
}

/// Parse one line of input
///
/// # Errors
///
/// Returns an error for unknown commands or malformed arguments.
///
/// # Examples
/// ```
/// use four_down::commands::simple::{Command, parse_command};
///
/// assert_eq!(
///     parse_command("2 3 e"),
///     Ok(Command::Place { row: 1, col: 2, letter: 'e' })
/// );
/// assert_eq!(parse_command("hint"), Ok(Command::Hint));
/// ```
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let command = match tokens.as_slice() {
        [] => Command::Show,
        [cmd] => match cmd.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Command::Quit,
            "hint" | "h" => Command::Hint,
            "show" | "s" => Command::Show,
            "new" | "n" => Command::New,
            "help" | "?" => Command::Help,
            _ => return Err(CommandError::Unknown((*cmd).to_string())),
        },
        [cmd, row, word] if cmd.eq_ignore_ascii_case("row") => Command::Row {
            row: parse_index(row)?,
            word: (*word).to_string(),
        },
        [row, col, letter] => Command::Place {
            row: parse_index(row)?,
            col: parse_index(col)?,
            letter: parse_letter(letter)?,
        },
        _ => return Err(CommandError::Unknown(input.trim().to_string())),
    };
    Ok(command)
}

/// Type `letter` at (row, col)
///
/// # Errors
///
/// Returns an error for a cell outside the grid or a non-letter.
pub fn place(game: &mut GameState, row: usize, col: usize, letter: char) -> Result<Move, GameError> {
    game.focus(row, col)?;
    game.type_letter(letter)
}

/// Type `word` across `row`, one letter per cell, skipping locked cells
///
/// Letters beyond the grid width are ignored.
///
/// # Errors
///
/// Returns an error for a row outside the grid or a non-letter.
pub fn fill_row(game: &mut GameState, row: usize, word: &str) -> Result<Vec<Move>, GameError> {
    let mut moves = Vec::new();
    for (col, letter) in word.chars().take(game.size()).enumerate() {
        game.focus(row, col)?;
        if game.is_solved() {
            break;
        }
        if game.cell(row, col).locked {
            continue;
        }
        moves.push(game.type_letter(letter)?);
    }
    if moves.is_empty() {
        game.focus(row, 0)?;
    }
    Ok(moves)
}

fn describe(mv: Move) -> Option<String> {
    let text = match mv {
        Move::Correct => "🟩 Correct!".green().to_string(),
        Move::Present => "🟨 In that row or column".yellow().to_string(),
        Move::Absent => "⬜ Not in that row or column".to_string(),
        Move::Locked => "🔒 That cell is already solved".bright_black().to_string(),
        Move::Cleared | Move::Moved | Move::Solved | Move::Ignored => return None,
    };
    Some(text)
}

fn show(game: &GameState) {
    print_grid(game);
    print_keyboard(game);
    print_status(game);
}

fn print_help() {
    println!("\nCommands:");
    println!("  <row> <col> <letter>   Place a letter, e.g. '2 3 e'");
    println!("  row <n> <word>         Fill a whole row, e.g. 'row 1 card'");
    println!("  hint                   Reveal one cell");
    println!("  show                   Redraw the board");
    println!("  new                    Start a new puzzle");
    println!("  quit                   Exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if no puzzle can be generated.
pub fn run_simple(config: GeneratorConfig, words: &[Word], difficulty: Difficulty) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   4DOWN - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Every row and every column is a word. Fill in the grid!");
    println!("🟩 right letter   🟨 letter is in that row or column   ⬜ neither");
    print_help();

    let mut config = config;
    let mut game = new_game(config, words, difficulty)?;
    show(&game);

    loop {
        let Some(input) = get_user_input("Move")? else {
            return Ok(());
        };

        match parse_command(&input) {
            Err(err) => println!("❌ {err}"),
            Ok(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(Command::Help) => print_help(),
            Ok(Command::Show) => show(&game),
            Ok(Command::New) => {
                config = config.advance_seed();
                game = new_game(config, words, difficulty)?;
                println!("\n🔄 New puzzle!");
                show(&game);
            }
            Ok(Command::Hint) => {
                match game.hint(&mut rand::rng()) {
                    Some((row, col)) => {
                        println!("💡 Revealed row {} column {}", row + 1, col + 1);
                    }
                    None => println!("No hints left"),
                }
                show(&game);
            }
            Ok(Command::Place { row, col, letter }) => {
                match place(&mut game, row, col, letter) {
                    Ok(mv) => {
                        if let Some(text) = describe(mv) {
                            println!("{text}");
                        }
                    }
                    Err(err) => println!("❌ {err}"),
                }
                show(&game);
            }
            Ok(Command::Row { row, word }) => {
                if let Err(err) = fill_row(&mut game, row, &word) {
                    println!("❌ {err}");
                }
                show(&game);
            }
        }

        if game.is_solved() {
            print_win(&game);
            let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            config = config.advance_seed();
            game = new_game(config, words, difficulty)?;
            println!("\n🔄 New puzzle!");
            show(&game);
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellStatus, Solution};

    fn game() -> GameState {
        let rows = ["pond", "area", "scar", "tart"].map(|w| Word::new(w).unwrap());
        GameState::new(Solution::from_rows(rows.to_vec()).unwrap(), Difficulty::Easy)
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("new"), Ok(Command::New));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("   "), Ok(Command::Show));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn parse_place_is_one_based() {
        assert_eq!(
            parse_command("1 4 x"),
            Ok(Command::Place {
                row: 0,
                col: 3,
                letter: 'x'
            })
        );
    }

    #[test]
    fn parse_row() {
        assert_eq!(
            parse_command("ROW 3 scar"),
            Ok(Command::Row {
                row: 2,
                word: "scar".to_string()
            })
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_command("0 1 a"),
            Err(CommandError::BadNumber("0".to_string()))
        );
        assert_eq!(
            parse_command("1 x a"),
            Err(CommandError::BadNumber("x".to_string()))
        );
        assert_eq!(
            parse_command("1 1 ab"),
            Err(CommandError::BadLetter("ab".to_string()))
        );
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn place_reports_feedback() {
        let mut game = game();
        assert_eq!(place(&mut game, 0, 0, 'p'), Ok(Move::Correct));
        assert_eq!(place(&mut game, 0, 0, 'x'), Ok(Move::Locked));
        assert!(place(&mut game, 4, 0, 'x').is_err());
    }

    #[test]
    fn fill_row_types_each_letter() {
        let mut game = game();
        let moves = fill_row(&mut game, 1, "arxa").unwrap();
        assert_eq!(
            moves,
            [Move::Correct, Move::Correct, Move::Absent, Move::Correct]
        );
        assert_eq!(game.guess_count(), 4);
        assert_eq!(game.cell(1, 2).status, Some(CellStatus::Absent));
    }

    #[test]
    fn fill_row_skips_locked_cells() {
        let mut game = game();
        place(&mut game, 0, 0, 'p').unwrap();
        let moves = fill_row(&mut game, 0, "zond").unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(game.cell(0, 0).value, Some('P'));
    }

    #[test]
    fn fill_row_can_solve() {
        let mut game = game();
        for (row, word) in ["pond", "area", "scar"].iter().enumerate() {
            fill_row(&mut game, row, word).unwrap();
        }
        let moves = fill_row(&mut game, 3, "tart").unwrap();
        assert_eq!(moves.last(), Some(&Move::Solved));
        assert!(game.is_solved());
    }

    #[test]
    fn describe_only_feedback_moves() {
        assert!(describe(Move::Correct).is_some());
        assert!(describe(Move::Locked).is_some());
        assert!(describe(Move::Moved).is_none());
    }
}
