//! Word lists for Word Scramble
//!
//! Root words and the embedded dictionary are compiled into the binary; a custom
//! newline-delimited root-word list can be loaded from disk instead.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Root word used when the word list holds no usable entry
pub const FALLBACK_ROOT: &str = "silkworm";

/// Error raised when a word list resource cannot be loaded
#[derive(Debug)]
pub enum WordListError {
    /// The file is missing or could not be read
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "could not load word list '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
        }
    }
}

/// Where the root-word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl WordSource {
    /// Interpret a command-line value: `embedded` or a path to a file
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the list this source points at
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read.
    pub fn load(&self) -> Result<WordList, WordListError> {
        match self {
            Self::Embedded => Ok(WordList::from_slice(START_WORDS)),
            Self::File(path) => WordList::load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Immutable list of candidate root words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from embedded constants
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self {
            words: loader::words_from_slice(slice),
        }
    }

    /// Load a newline-delimited list from a file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Unreadable` if the file is missing or unreadable.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| WordListError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { words })
    }

    /// Pick a root word uniformly at random
    ///
    /// Falls back to [`FALLBACK_ROOT`] when the list is empty.
    pub fn choose_root<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .map_or(FALLBACK_ROOT, String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
