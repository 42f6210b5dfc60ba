//! Word list loading utilities
//!
//! Provides functions to load newline-delimited word lists from files or embedded constants.
//! Every entry is trimmed and lowercased; blank lines are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Parse newline-delimited text into normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_words;
///
/// let words = parse_words("Silkworm\n\n  airplane \n");
/// assert_eq!(words, vec!["silkworm", "airplane"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert an embedded string slice to owned, normalized words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}
