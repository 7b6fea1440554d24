//! Display functions for command results and the line-mode board

use super::formatters::{colored_keyboard, colored_row, row_to_emoji};
use crate::commands::ScoreResult;
use crate::engine::{GameState, Outcome, Phase};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.text().bright_yellow().bold(),
        result.guess.text().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", result.feedback.to_emoji());
    println!(
        "\n  Correct: {}   Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );

    if result.feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print every row of the grid followed by the hint keyboard
pub fn print_board(state: &GameState) {
    println!();
    for row in 0..state.rows() {
        let cells = state.row(row);
        println!("  {}   {}", colored_row(cells), row_to_emoji(cells));
    }

    println!();
    for line in colored_keyboard(state.hints(), 7) {
        println!("  {line}");
    }
    println!();
}

/// Print the game-over banner, if the game has ended
pub fn print_outcome(state: &GameState) {
    let Some(message) = state.outcome_message() else {
        return;
    };

    println!("{}", "═".repeat(40).bright_cyan());
    match state.phase() {
        Phase::Over(Outcome::Win) => {
            let used = state.current_row() + 1;
            println!("  {}", message.bright_green().bold());
            println!(
                "  Solved in {} {}",
                used.to_string().bright_cyan().bold(),
                if used == 1 { "guess" } else { "guesses" }
            );
        }
        _ => println!("  {}", message.red().bold()),
    }
    println!("{}", "═".repeat(40).bright_cyan());
}
