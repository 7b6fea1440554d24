//! TUI rendering with ratatui
//!
//! Draws the guess grid, the hint keyboard and the control bar from the
//! current `GameState`. Nothing here mutates the game.

use super::app::{App, MessageStyle};
use crate::engine::{CellStatus, Controls, GameState, HintStatus, Outcome, Phase};
use crate::output::formatters::cell_char;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keys per keyboard line
const KEYS_PER_LINE: usize = 7;

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Controls
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_controls(f, app.session.state(), chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORDLEZ")
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

fn render_board<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = app.session.state();
    let grid_height = (state.rows() * 2) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height + 2), // Grid
            Constraint::Min(6),                  // Keyboard
        ])
        .split(area);

    let grid = Paragraph::new(grid_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} letters ", state.cols()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, chunks[0]);

    let mut keyboard = keyboard_lines(state);
    if app.show_answer {
        keyboard.push(Line::from(""));
        keyboard.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                state.target().text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let keyboard = Paragraph::new(keyboard)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, chunks[1]);
}

fn grid_lines(state: &GameState) -> Vec<Line<'static>> {
    let typing = state.phase() == Phase::Input;
    let mut lines = Vec::with_capacity(state.rows() * 2);

    for row in 0..state.rows() {
        let mut spans = Vec::with_capacity(state.cols() * 2);
        for (col, cell) in state.row(row).iter().enumerate() {
            let index = row * state.cols() + col;
            let mut style = cell_style(cell.status);
            if typing && index == state.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let ch = if cell.is_blank() { '_' } else { cell_char(cell) };
            spans.push(Span::styled(format!(" {ch} "), style));
            spans.push(Span::raw(" "));
        }
        spans.pop();

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn keyboard_lines(state: &GameState) -> Vec<Line<'static>> {
    let keys: Vec<Span<'static>> = state
        .hints()
        .iter()
        .map(|(letter, hint)| Span::styled(format!(" {letter} "), hint_style(hint)))
        .collect();

    keys.chunks(KEYS_PER_LINE)
        .map(|chunk| {
            let mut spans = Vec::with_capacity(chunk.len() * 2);
            for key in chunk {
                spans.push(key.clone());
                spans.push(Span::raw(" "));
            }
            spans.pop();
            Line::from(spans)
        })
        .collect()
}

/// Tile style for a grid cell
#[must_use]
pub fn cell_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Filled => Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD),
        CellStatus::Empty => Style::default().fg(Color::DarkGray),
    }
}

/// Key style for a keyboard hint
#[must_use]
pub fn hint_style(hint: HintStatus) -> Style {
    match hint {
        HintStatus::Correct => cell_style(CellStatus::Correct),
        HintStatus::Present => cell_style(CellStatus::Present),
        HintStatus::Absent => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        HintStatus::Unused => Style::default().fg(Color::Black).bg(Color::Cyan),
    }
}

/// Short description of the current phase
#[must_use]
pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Input => "Typing",
        Phase::RowFull => "Row full - Enter to submit",
        Phase::Over(Outcome::Win) => "Solved!",
        Phase::Over(Outcome::Lose) => "Out of guesses",
    }
}

fn render_info_panel<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Status
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_status(f, app.session.state(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_status(f: &mut Frame, state: &GameState, area: Rect) {
    let row = (state.current_row() + 1).min(state.rows());
    let mut lines = vec![
        Line::from(format!("Word length: {}", state.cols())),
        Line::from(format!("Guess:       {row}/{}", state.rows())),
        Line::from(format!("Status:      {}", phase_label(state.phase()))),
    ];

    if let Some(message) = state.outcome_message() {
        let color = if state.is_win() {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let status = Paragraph::new(lines).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_controls(f: &mut Frame, state: &GameState, area: Rect) {
    let Controls {
        letter_input,
        delete,
        submit,
    } = state.controls();

    let control = |label: &'static str, enabled: bool, color: Color| {
        let style = if enabled {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        control("A-Z: type", letter_input, Color::Cyan),
        Span::raw("  │  "),
        control("⌫: delete", delete, Color::Red),
        Span::raw("  │  "),
        control("⏎: submit", submit, Color::Green),
        Span::raw("  │  "),
        control("^R: new game", true, Color::Yellow),
        Span::raw("  │  "),
        control("Tab: cheat", true, Color::Magenta),
        Span::raw("  │  "),
        control("Esc: quit", true, Color::White),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(controls, area);
}
