//! Word Scramble
//!
//! A terminal word game: spell real words using only the letters of a randomly
//! chosen root word, without repeating yourself.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RejectionReason;
//! use word_scramble::dictionary::WordSetDictionary;
//! use word_scramble::session::{GameSession, Submission};
//! use word_scramble::wordlists::WordList;
//!
//! let list = WordList::from_slice(&["silkworm"]);
//! let mut session = GameSession::with_word_list(list, WordSetDictionary::embedded());
//! session.start_game().unwrap();
//!
//! assert_eq!(
//!     session.submit_word("Silk"),
//!     Ok(Submission::Accepted("silk".to_string()))
//! );
//! assert_eq!(session.submit_word("silk"), Err(RejectionReason::AlreadyUsed));
//! ```

// Core domain types
pub mod core;

// Spell-checking capability
pub mod dictionary;

// Round state and submissions
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
