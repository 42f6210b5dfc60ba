//! Submission normalization and letter-availability checks
//!
//! A submitted word is composable from a root word when every one of its letters
//! can be matched to a distinct letter instance of the root. Duplicates count:
//! "loom" needs two `o`s in the root.

/// Normalize raw user input: trim surrounding whitespace and lowercase.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk \n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Working copy of a root word's letters
///
/// Letters are consumed one at a time; a consumed letter cannot be taken again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    remaining: Vec<char>,
}

impl LetterPool {
    /// Create a pool holding every letter of `root`, in order
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            remaining: root.chars().collect(),
        }
    }

    /// Remove the first remaining occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) when the letter is not available.
    pub fn take(&mut self, letter: char) -> bool {
        match self.remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.remaining.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Check whether `word` can be spelled using the letters of `root`
///
/// Each letter of `word` consumes the first remaining matching letter of `root`;
/// the check fails as soon as a letter is unavailable.
///
/// # Examples
/// ```
/// use word_scramble::core::is_composable;
///
/// assert!(is_composable("silk", "silkworm"));
/// assert!(!is_composable("wow", "silkworm"));
/// assert!(!is_composable("zzz", "silkworm"));
/// ```
#[must_use]
pub fn is_composable(word: &str, root: &str) -> bool {
    let mut pool = LetterPool::new(root);
    word.chars().all(|letter| pool.take(letter))
}
