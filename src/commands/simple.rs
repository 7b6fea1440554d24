//! Simple line-mode game
//!
//! Plays WordLeZ without the TUI: each input line is one whole guess, typed
//! into the engine letter by letter and then submitted.

use crate::core::Letter;
use crate::engine::{Action, GameState, Session};
use crate::output::{print_board, print_outcome};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// What happened to a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessEntry {
    /// The row was filled and scored
    Scored,
    /// The guess had the wrong number of letters; state is unchanged
    WrongLength { expected: usize, got: usize },
    /// The guess contained something other than A-Z; state is unchanged
    InvalidCharacters,
    /// The game had already ended; state is unchanged
    GameOver,
}

/// Feed a whole guess through the engine's letter, delete and submit actions
///
/// The guess is validated before any action is applied, so a rejected line
/// leaves the game exactly as it was.
pub fn enter_guess(state: &mut GameState, guess: &str) -> GuessEntry {
    if state.is_over() {
        return GuessEntry::GameOver;
    }

    let Some(letters) = guess
        .trim()
        .chars()
        .map(Letter::from_char)
        .collect::<Option<Vec<_>>>()
    else {
        return GuessEntry::InvalidCharacters;
    };

    if letters.len() != state.cols() {
        return GuessEntry::WrongLength {
            expected: state.cols(),
            got: letters.len(),
        };
    }

    // Clear anything left in the current row
    while state.allows(Action::Delete) {
        state.apply(Action::Delete);
    }
    for letter in letters {
        state.apply(Action::Letter(letter));
    }
    state.apply(Action::Submit);

    GuessEntry::Scored
}

/// Run the simple line-mode game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// source cannot supply a word for a new game.
pub fn run_simple<S: WordSource>(session: &mut Session<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        WordLeZ - Line Mode           ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Type a whole guess and press Enter.");
    println!("Commands: /new for a new game, /answer to reveal, /quit to exit\n");

    announce(session.state());

    loop {
        let prompt = format!("Guess {}", session.state().current_row() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "/new" | "/n" => {
                session.restart().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!");
                announce(session.state());
                continue;
            }
            "/answer" | "/a" => {
                println!("Answer: {}\n", session.state().target().text().bright_yellow());
                continue;
            }
            "" => continue,
            _ => {}
        }

        match enter_guess(session.state_mut(), &input) {
            GuessEntry::Scored => {}
            GuessEntry::WrongLength { expected, got } => {
                println!("❌ Need {expected} letters, got {got}\n");
                continue;
            }
            GuessEntry::InvalidCharacters => {
                println!("❌ Letters A-Z only\n");
                continue;
            }
            GuessEntry::GameOver => {
                println!("Game is over. Type /new to play again or /quit to exit.\n");
                continue;
            }
        }

        print_board(session.state());
        if session.state().is_over() {
            print_outcome(session.state());
            println!("Type /new to play again or /quit to exit.\n");
        }
    }
}

fn announce(state: &GameState) {
    println!(
        "Guess the {}-letter word in {} tries.",
        state.cols().to_string().bright_cyan().bold(),
        state.rows()
    );
    print_board(state);
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
