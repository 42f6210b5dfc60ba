//! Word Scramble - CLI
//!
//! Spell words from the letters of a random root word, in a TUI or plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::run_simple,
    dictionary::{DEFAULT_LANGUAGE, WordSetDictionary},
    interactive::{App, run_tui},
    session::GameSession,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default, English) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag passed to the dictionary
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root-word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one word per line, scriptable)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(command, cli.log_file.as_deref())?;

    let dictionary = WordSetDictionary::from_arg(&cli.dictionary, &cli.language)
        .with_context(|| format!("failed to load dictionary '{}'", cli.dictionary))?;
    log::debug!(
        "dictionary '{}' ({}) ready with {} words",
        cli.dictionary,
        dictionary.language(),
        dictionary.len()
    );

    let mut session =
        GameSession::new(WordSource::from_arg(&cli.wordlist), dictionary).with_language(&cli.language);
    if let Some(seed) = cli.seed {
        session = session.with_seed(seed);
    }

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_simple(&mut session, stdin.lock(), &mut stdout)
        }
    }
}

/// Set up `env_logger`
///
/// `RUST_LOG` always wins. Otherwise warnings are shown in text mode, while the
/// TUI stays silent unless a log file is given, since stderr output would tear
/// through the alternate screen.
fn init_logging(command: Commands, log_file: Option<&Path>) -> Result<()> {
    let default_filter = match (command, log_file) {
        (Commands::Play, None) => "off",
        _ => "warn",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file '{}'", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
