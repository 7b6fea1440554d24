//! TUI application state and key routing

use crate::core::Letter;
use crate::engine::{Action, GameState, Outcome, Phase, Session};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub show_answer: bool,
    pub should_quit: bool,
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

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            show_answer: false,
            should_quit: false,
        };
        app.announce_game();
        app
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    fn announce_game(&mut self) {
        let text = format!(
            "Guess the {}-letter word in {} tries.",
            self.state().cols(),
            self.state().rows()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Route one key press to the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (avoids double input on Windows)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_answer = !self.show_answer,
            KeyCode::Char(c) if !ctrl => {
                if let Some(letter) = Letter::from_char(c) {
                    self.session.apply(Action::Letter(letter));
                }
            }
            KeyCode::Backspace | KeyCode::Delete => self.session.apply(Action::Delete),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if !self.state().allows(Action::Submit) {
            return;
        }

        let row = self.state().current_row();
        self.session.apply(Action::Submit);

        match self.state().phase() {
            Phase::Over(Outcome::Win) => {
                let celebration = match row + 1 {
                    1 => "🎯 HOLE IN ONE! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl-R for a new game or Esc to quit.", MessageStyle::Info);
            }
            Phase::Over(Outcome::Lose) => {
                let text = format!("Out of guesses! The word was {}.", self.state().target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Ctrl-R for a new game or Esc to quit.", MessageStyle::Info);
            }
            Phase::Input | Phase::RowFull => {
                let left = self.state().rows() - self.state().current_row();
                let text = format!("{left} guesses left");
                self.add_message(&text, MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.session.restart() {
            Ok(()) => {
                self.messages.clear();
                self.show_answer = false;
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_game();
            }
            Err(err) => {
                let text = format!("Could not start a new game: {err}");
                self.add_message(&text, MessageStyle::Error);
            }
        }
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
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
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
