//! Round state and word submission
//!
//! A [`GameSession`] owns the current root word and the words accepted so far.
//! Its whole mutating surface is [`GameSession::start_game`] and
//! [`GameSession::submit_word`]; presentation layers hold one session and
//! re-render after each call.

mod game;

pub use game::GameSession;

use crate::wordlists::WordListError;
use std::fmt;

/// Result of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The word passed every check and now heads the used-word list
    Accepted(String),
    /// Blank input; nothing happened
    Ignored,
}

/// Errors that stop a session from running a round
#[derive(Debug)]
pub enum SessionError {
    /// The root-word list could not be loaded
    WordList(WordListError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordList(err) => write!(f, "cannot start a round: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordList(err) => Some(err),
        }
    }
}

impl From<WordListError> for SessionError {
    fn from(err: WordListError) -> Self {
        Self::WordList(err)
    }
}
