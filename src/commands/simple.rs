//! Simple text mode
//!
//! Line-based game without the TUI: one submission per line.

use crate::dictionary::Dictionary;
use crate::output::{print_accepted, print_alert, print_round_banner, print_used_words};
use crate::session::{GameSession, Submission};
use anyhow::Result;
use std::io::{BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand {
    Quit,
    NewRound,
    ShowWords,
    Help,
    Submit(String),
}

impl LineCommand {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewRound,
            ":words" | ":w" => Self::ShowWords,
            ":help" | ":h" | ":?" => Self::Help,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Run the simple text mode until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if the root-word list cannot be loaded or if reading input
/// or writing output fails.
pub fn run_simple<D, R, W>(session: &mut GameSession<D>, mut input: R, out: &mut W) -> Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Word Scramble - spell words using the letters of the root word.")?;
    print_help(out)?;

    let root = session.start_game()?.to_string();
    print_round_banner(out, &root)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match LineCommand::parse(&line) {
            LineCommand::Quit => break,
            LineCommand::NewRound => {
                let root = session.start_game()?.to_string();
                print_round_banner(out, &root)?;
            }
            LineCommand::ShowWords => print_used_words(out, session.used_words())?,
            LineCommand::Help => print_help(out)?,
            LineCommand::Submit(raw) => match session.submit_word(&raw) {
                Ok(Submission::Accepted(word)) => print_accepted(out, &word)?,
                Ok(Submission::Ignored) => {}
                Err(reason) => print_alert(out, &reason.alert())?,
            },
        }
    }

    writeln!(
        out,
        "Thanks for playing! You found {} word(s) this round.",
        session.used_words().len()
    )?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Commands: ':new' new root word, ':words' list found words, ':quit' exit"
    )?;
    Ok(())
}
