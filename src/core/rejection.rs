//! Typed rejection reasons and the alerts shown for them

use std::fmt;

/// Why a submitted word was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The word was already accepted this round
    AlreadyUsed,
    /// The word needs letters the root word does not have (or not enough of them)
    NotComposableFromRoot,
    /// The dictionary does not recognize the word
    NotARealWord,
}

impl RejectionReason {
    /// Build the alert shown to the player for this rejection
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RejectionReason;
    ///
    /// let alert = RejectionReason::AlreadyUsed.alert();
    /// assert_eq!(alert.title, "Word used already");
    /// ```
    #[must_use]
    pub fn alert(self) -> Alert {
        match self {
            Self::AlreadyUsed => Alert::new("Word used already", "Be more original"),
            Self::NotComposableFromRoot => {
                Alert::new("Word not possible", "You can't just make them up.")
            }
            Self::NotARealWord => Alert::new("Word not recognized", "That isn't a real word."),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyUsed => write!(f, "word already used this round"),
            Self::NotComposableFromRoot => write!(f, "word cannot be spelled from the root word"),
            Self::NotARealWord => write!(f, "word is not in the dictionary"),
        }
    }
}

impl std::error::Error for RejectionReason {}

/// Modal alert content: a short title plus a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
