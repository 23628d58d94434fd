//! TUI application state and logic

use crate::commands::new_game;
use crate::core::Word;
use crate::game::{Direction, GameState, Move};
use crate::generator::GeneratorConfig;
use crate::wordlists::{Difficulty, WordSource, load_words};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub source: WordSource,
    pub words: Vec<Word>,
    pub config: GeneratorConfig,
    pub difficulty: Difficulty,
    pub game: GameState,
    pub input_mode: InputMode,
    /// Result of the last grid input, used to flash the cursor cell
    pub last_move: Option<Move>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Guesses summed over won games
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl App {
    /// Create the app and generate the first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated from `words`.
    pub fn new(
        source: WordSource,
        words: Vec<Word>,
        config: GeneratorConfig,
        difficulty: Difficulty,
    ) -> Result<Self> {
        let game = new_game(config, &words, difficulty)?;

        let mut app = Self {
            source,
            words,
            config,
            difficulty,
            game,
            input_mode: InputMode::Playing,
            last_move: None,
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.add_message(
            "Welcome! Every row and every column is a word.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type letters, TAB for a hint, Ctrl-N for a new puzzle.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Start a new puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated; the current game is kept.
    pub fn new_game(&mut self) -> Result<()> {
        let config = self.config.advance_seed();
        let game = new_game(config, &self.words, self.difficulty)?;
        self.start(config, game);
        Ok(())
    }

    /// Switch to the next difficulty and start a new puzzle
    ///
    /// Embedded word lists follow the difficulty; a custom list is kept and only
    /// the hint allowance changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the new word list can't be loaded or yields no puzzle.
    /// The app is left unchanged in that case.
    pub fn cycle_difficulty(&mut self) -> Result<()> {
        let difficulty = self.difficulty.next();
        let config = self.config.advance_seed();

        let game = if let WordSource::Embedded(_) = self.source {
            let source = WordSource::Embedded(difficulty);
            let words = load_words(&source)?;
            let game = new_game(config, &words, difficulty)?;
            self.source = source;
            self.words = words;
            game
        } else {
            new_game(config, &self.words, difficulty)?
        };

        self.difficulty = difficulty;
        self.start(config, game);
        Ok(())
    }

    fn start(&mut self, config: GeneratorConfig, game: GameState) {
        self.config = config;
        self.game = game;
        self.stats.games_played += 1;
        self.input_mode = InputMode::Playing;
        self.last_move = None;
        self.messages.clear();
        self.add_message(
            &format!("New {} puzzle started!", self.difficulty),
            MessageStyle::Info,
        );
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.restart(),
                KeyCode::Char('d') => {
                    if let Err(err) = self.cycle_difficulty() {
                        self.add_message(&format!("{err:#}"), MessageStyle::Error);
                    }
                }
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('n') => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => self.last_move = Some(self.game.delete()),
                KeyCode::Enter => self.last_move = Some(self.game.enter()),
                KeyCode::Up => self.move_cursor(Direction::Up),
                KeyCode::Down => self.move_cursor(Direction::Down),
                KeyCode::Left => self.move_cursor(Direction::Left),
                KeyCode::Right => self.move_cursor(Direction::Right),
                KeyCode::Tab => self.hint(),
                _ => {}
            },
        }
    }

    fn restart(&mut self) {
        if let Err(err) = self.new_game() {
            self.add_message(&format!("{err:#}"), MessageStyle::Error);
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        self.last_move = Some(self.game.move_cursor(direction));
    }

    fn type_letter(&mut self, c: char) {
        match self.game.type_letter(c) {
            Ok(Move::Solved) => self.on_solved(),
            Ok(mv) => {
                if mv == Move::Locked {
                    self.add_message("That cell is already solved", MessageStyle::Error);
                }
                self.last_move = Some(mv);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn hint(&mut self) {
        match self.game.hint(&mut rand::rng()) {
            Some((row, col)) => {
                self.last_move = Some(Move::Correct);
                self.add_message(
                    &format!(
                        "💡 Revealed row {}, column {} ({} hints left)",
                        row + 1,
                        col + 1,
                        self.game.hints_remaining()
                    ),
                    MessageStyle::Info,
                );
                if self.game.is_solved() {
                    self.on_solved();
                }
            }
            None if self.game.hints_remaining() == 0 => {
                self.add_message("No hints left!", MessageStyle::Error);
            }
            None => self.add_message("Nothing left to reveal", MessageStyle::Info),
        }
    }

    fn on_solved(&mut self) {
        self.last_move = Some(Move::Solved);
        self.input_mode = InputMode::WinCelebration;
        self.stats.games_won += 1;
        self.stats.total_guesses += self.game.guess_count();

        let guesses = self.game.guess_count();
        self.add_message(
            &format!("🎉 SOLVED in {guesses} guesses!"),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::path::PathBuf;

    fn app() -> App {
        let words = words_from_slice(&["card", "area", "rear", "dart"]);
        App::new(
            WordSource::File(PathBuf::from("fixture.txt")),
            words,
            GeneratorConfig::default().with_seed(1),
            Difficulty::Easy,
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn new_app_starts_playing() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.game.solution().row(0).text(), "CARD");
    }

    #[test]
    fn typing_updates_game() {
        let mut app = app();
        type_text(&mut app, "cx");
        assert_eq!(app.game.guess_count(), 2);
        assert_eq!(app.game.cell(0, 0).value, Some('C'));
        assert_eq!(app.last_move, Some(Move::Absent));
    }

    #[test]
    fn locked_cell_shakes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.last_move, Some(Move::Locked));
        assert_eq!(app.game.cell(0, 0).value, Some('C'));
    }

    #[test]
    fn non_letters_are_reported() {
        let mut app = app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.game.guess_count(), 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn solving_enters_celebration() {
        let mut app = app();
        type_text(&mut app, "cardarearreardart");
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_guesses, 16);
        assert!((app.stats.average_guesses() - 16.0).abs() < f64::EPSILON);

        // Letters no longer reach the grid
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.game.guess_count(), 16);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.game.guess_count(), 0);
    }

    #[test]
    fn celebration_q_quits() {
        let mut app = app();
        type_text(&mut app, "cardarearreardart");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_gives_hint() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.game.hints_remaining(), 4);
        assert_eq!(app.game.guess_count(), 0);
    }

    #[test]
    fn hints_can_solve() {
        let mut app = app();
        type_text(&mut app, "cardarearreardar");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
    }

    #[test]
    fn backspace_and_enter() {
        let mut app = app();
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.last_move, Some(Move::Cleared));
        assert_eq!(app.game.cell(0, 0).value, None);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.cursor(), Some((1, 0)));
    }

    #[test]
    fn ctrl_keys() {
        let mut app = app();
        type_text(&mut app, "c");
        ctrl(&mut app, 'n');
        assert_eq!(app.game.guess_count(), 0);
        assert_eq!(app.stats.games_played, 2);

        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn cycle_difficulty_keeps_custom_words() {
        let mut app = app();
        ctrl(&mut app, 'd');
        assert_eq!(app.difficulty, Difficulty::Medium);
        assert_eq!(app.words.len(), 4);
        assert_eq!(app.game.hints_remaining(), 3);
    }

    #[test]
    fn cycle_difficulty_reloads_embedded_words() {
        let mut app = App::new(
            WordSource::Embedded(Difficulty::Easy),
            load_words(&WordSource::Embedded(Difficulty::Easy)).unwrap(),
            GeneratorConfig::default().with_seed(3),
            Difficulty::Easy,
        )
        .unwrap();

        app.cycle_difficulty().unwrap();
        assert_eq!(app.source, WordSource::Embedded(Difficulty::Medium));
        assert_eq!(app.words.len(), crate::wordlists::MEDIUM_COUNT);
    }

    #[test]
    fn failed_cycle_leaves_app_unchanged() {
        let mut app = App::new(
            WordSource::Embedded(Difficulty::Easy),
            load_words(&WordSource::Embedded(Difficulty::Easy)).unwrap(),
            GeneratorConfig::default().with_seed(3),
            Difficulty::Easy,
        )
        .unwrap();
        let solution = app.game.solution().clone();

        // Four-letter lists never fill a 5x5 grid
        app.config.size = 5;
        ctrl(&mut app, 'd');

        assert_eq!(app.difficulty, Difficulty::Easy);
        assert_eq!(app.difficulty, app.game.difficulty());
        assert_eq!(app.source, WordSource::Embedded(Difficulty::Easy));
        assert_eq!(app.words.len(), crate::wordlists::EASY_COUNT);
        assert_eq!(app.game.solution(), &solution);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn failed_cycle_keeps_custom_list_difficulty() {
        let mut app = app();
        app.words = words_from_slice(&["bath", "also", "tear", "horn"]);
        assert!(app.cycle_difficulty().is_err());
        assert_eq!(app.difficulty, Difficulty::Easy);
        assert_eq!(app.game.hints_remaining(), 5);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
