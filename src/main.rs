//! WordLeZ - CLI
//!
//! Variable-length Wordle with a TUI, a plain line mode, and a scoring helper.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordlez::{
    commands::{run_simple, score_guess},
    config::{GameConfig, Wordlist},
    engine::Session,
    interactive::{App, run_tui},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordlez",
    about = "Guess the hidden 3-7 letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Play a fixed target word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Seed for reproducible word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Shortest target word length
    #[arg(long, global = true, default_value_t = 3)]
    min_len: usize,

    /// Longest target word length
    #[arg(long, global = true, default_value_t = 7)]
    max_len: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (type one whole guess per line)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            wordlist: Wordlist::parse(&self.wordlist),
            word: self.word.clone(),
            seed: self.seed,
            min_len: self.min_len,
            max_len: self.max_len,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let session = Session::start(config.word_source()?)?;
    run_tui(App::new(session))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut session = Session::start(config.word_source()?)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
