//! Dictionary Service
//!
//! Answers one question: "is this a real, correctly spelled word in language L?".
//! The game treats any `false` as a rejection and never asks for anything else.

use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Capability interface for spell-checking a single word
///
/// Implementations may be backed by a local word list, a remote API, or a
/// platform spell-checker.
pub trait Dictionary {
    /// Check whether `word` is a correctly spelled word in `language`
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Error raised when a dictionary resource cannot be loaded
#[derive(Debug)]
pub enum DictionaryError {
    /// The file is missing or could not be read
    Unreadable { path: PathBuf, source: io::Error },
    /// The dictionary cannot check words in the requested language
    UnsupportedLanguage { requested: String, available: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "could not load dictionary '{}': {source}", path.display())
            }
            Self::UnsupportedLanguage {
                requested,
                available,
            } => write!(
                f,
                "the embedded dictionary only supports '{available}', not '{requested}' \
                 (pass --dictionary <file> for other languages)"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::UnsupportedLanguage { .. } => None,
        }
    }
}

/// Hash-set backed dictionary for a single language
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordSetDictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Load a newline-delimited dictionary file for `language`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unreadable` if the file is missing or unreadable.
    pub fn load_from_file<P: AsRef<Path>>(
        language: impl Into<String>,
        path: P,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(language, words))
    }

    /// Load from a command-line value: `embedded` or a path to a file
    ///
    /// A file is tagged with `language`. The embedded dictionary is English only.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::UnsupportedLanguage` if `embedded` is requested
    /// for any language other than [`DEFAULT_LANGUAGE`], and
    /// `DictionaryError::Unreadable` if a file path cannot be read.
    pub fn from_arg(value: &str, language: &str) -> Result<Self, DictionaryError> {
        match value {
            "embedded" if language == DEFAULT_LANGUAGE => Ok(Self::embedded()),
            "embedded" => Err(DictionaryError::UnsupportedLanguage {
                requested: language.to_string(),
                available: DEFAULT_LANGUAGE.to_string(),
            }),
            path => Self::load_from_file(language, path),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        if language != self.language {
            log::debug!(
                "dictionary language '{}' cannot check '{word}' in '{language}'",
                self.language
            );
            return false;
        }
        self.words.contains(word)
    }
}
