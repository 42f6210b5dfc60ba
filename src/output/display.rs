//! Display functions for the text mode

use super::formatters::{spaced_letters, word_with_count};
use crate::core::Alert;
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner announcing a new round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_banner<W: Write>(out: &mut W, root: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        spaced_letters(root).bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print confirmation of an accepted word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_accepted<W: Write>(out: &mut W, word: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), word_with_count(word))
}

/// Print a rejection alert
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_alert<W: Write>(out: &mut W, alert: &Alert) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red().bold(), alert.title.red().bold())?;
    writeln!(out, "  {}", alert.message)
}

/// Print the words found so far, most recent first
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_used_words<W: Write>(out: &mut W, words: &[String]) -> io::Result<()> {
    if words.is_empty() {
        return writeln!(out, "{}", "No words yet.".bright_black());
    }
    writeln!(out, "Words found ({}):", words.len())?;
    for word in words {
        writeln!(out, "  {}", word_with_count(word))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_shows_root() {
        let text = render(|out| print_round_banner(out, "silkworm"));
        assert!(text.contains("S I L K W O R M"));
    }

    #[test]
    fn accepted_shows_count() {
        let text = render(|out| print_accepted(out, "silk"));
        assert!(text.contains("④ silk"));
    }

    #[test]
    fn alert_shows_title_and_message() {
        let alert = Alert::new("Word used already", "Be more original");
        let text = render(|out| print_alert(out, &alert));
        assert!(text.contains("Word used already"));
        assert!(text.contains("Be more original"));
    }

    #[test]
    fn used_words_listed_in_order() {
        let words = vec!["worm".to_string(), "silk".to_string()];
        let text = render(|out| print_used_words(out, &words));
        let worm = text.find("worm").unwrap();
        let silk = text.find("silk").unwrap();
        assert!(worm < silk);
        assert!(text.contains("Words found (2)"));
    }

    #[test]
    fn used_words_empty() {
        let text = render(|out| print_used_words(out, &[]));
        assert!(text.contains("No words yet."));
    }
}
