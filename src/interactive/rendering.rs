//! TUI rendering with ratatui
//!
//! Grid, keyboard and game panels for the puzzle interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::CellStatus;
use crate::game::Move;
use crate::output::formatters::{KEYBOARD_ROWS, grid_to_emoji};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Grid and info
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 4DOWN - every row and every column is a word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background and foreground for a feedback status
fn status_colors(status: Option<CellStatus>) -> (Color, Color) {
    match status {
        Some(CellStatus::Correct) => (Color::Green, Color::Black),
        Some(CellStatus::Present) => (Color::Yellow, Color::Black),
        Some(CellStatus::Absent) => (Color::DarkGray, Color::White),
        None => (Color::Reset, Color::White),
    }
}

/// Rect of width `width` and height `height` centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Puzzle ({}) ", app.difficulty))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let game = &app.game;
    let n = game.size() as u16;
    let grid_width = n * CELL_WIDTH + n.saturating_sub(1) * CELL_GAP;
    let grid_height = n * CELL_HEIGHT;
    let origin = centered(inner, grid_width, grid_height);

    for row in 0..game.size() {
        for col in 0..game.size() {
            let rect = Rect::new(
                origin.x + col as u16 * (CELL_WIDTH + CELL_GAP),
                origin.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(inner);
            if rect.is_empty() {
                continue;
            }

            let cell = game.cell(row, col);
            let (bg, fg) = status_colors(cell.status);
            let selected = game.cursor() == Some((row, col));
            let border = match (selected, app.last_move) {
                (true, Some(Move::Locked)) => Style::default().fg(Color::Red),
                (true, _) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                (false, _) => Style::default().fg(Color::Gray),
            };

            let letter = cell.value.map(String::from).unwrap_or_default();
            let widget = Paragraph::new(letter)
                .alignment(Alignment::Center)
                .style(Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(if selected {
                            BorderType::Thick
                        } else {
                            BorderType::Plain
                        })
                        .border_style(border),
                );
            f.render_widget(widget, rect);
        }
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Hints gauge
            Constraint::Percentage(50), // Stats or win banner
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    match app.input_mode {
        InputMode::WinCelebration => render_win_banner(f, app, chunks[1]),
        InputMode::Playing => render_stats(f, app, chunks[1]),
    }
    render_messages(f, app, chunks[2]);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let max = app.difficulty.max_hints();
    let left = app.game.hints_remaining();
    let percent = if max == 0 { 0 } else { (left * 100 / max) as u16 };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Hints (TAB) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent.min(100))
        .label(format!("{left}/{max} left"));

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Guesses:   "),
            Span::styled(
                app.game.guess_count().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Played:    {} | Won: {}",
            app.stats.games_played, app.stats.games_won
        )),
        Line::from(format!("Avg:       {:.1} guesses", app.stats.average_guesses())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", Style::default().bg(Color::Green).fg(Color::Black)),
            Span::raw(" right letter"),
        ]),
        Line::from(vec![
            Span::styled(" A ", Style::default().bg(Color::Yellow).fg(Color::Black)),
            Span::raw(" in that row or column"),
        ]),
        Line::from(vec![
            Span::styled(" A ", Style::default().bg(Color::DarkGray).fg(Color::White)),
            Span::raw(" in neither"),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_win_banner(f: &mut Frame, app: &App, area: Rect) {
    let mut content: Vec<Line> = grid_to_emoji(&app.game)
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    content.push(Line::from(""));
    content.extend(
        app.game
            .share_text()
            .lines()
            .map(|line| Line::from(line.to_string())),
    );

    let paragraph = Paragraph::new(content)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" 🎉 SOLVED! 🎉 ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let (bg, fg) = status_colors(app.game.letter_status().get(&key).copied());
                    [
                        Span::styled(format!(" {key} "), Style::default().bg(bg).fg(fg)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let status_text = format!("{} | {} words", app.source, app.words.len());
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "n: New Game | q: Quit",
        InputMode::Playing => {
            "Arrows: Move | Enter: Next row | TAB: Hint | Ctrl-N: New | Ctrl-D: Difficulty | Esc: Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{Difficulty, WordSource};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn app() -> App {
        App::new(
            WordSource::File(PathBuf::from("fixture.txt")),
            words_from_slice(&["card", "area", "rear", "dart"]),
            GeneratorConfig::default(),
            Difficulty::Easy,
        )
        .unwrap()
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn centered_fits_inside() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 40, 40), area);
    }

    #[test]
    fn renders_playing_screen() {
        let screen = screen(&app());
        assert!(screen.contains("4DOWN"));
        assert!(screen.contains("Puzzle (easy)"));
        assert!(screen.contains("5/5 left"));
    }

    #[test]
    fn renders_typed_letters() {
        let mut app = app();
        app.game.type_letter('c').unwrap();
        app.game.type_letter('x').unwrap();
        assert!(screen(&app).contains("Guesses:   2"));
    }

    #[test]
    fn renders_win_banner() {
        let mut app = app();
        for c in "cardarearreardart".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let screen = screen(&app);
        assert!(screen.contains("SOLVED"));
        assert!(screen.contains("Try it yourself!"));
    }
}
