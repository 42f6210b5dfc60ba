//! Game session: round lifecycle and the three submission checks

use super::{SessionError, Submission};
use crate::core::{RejectionReason, is_composable, normalize};
use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use crate::wordlists::{WordList, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One player's game: the current root word and the words found so far
///
/// The root-word list is loaded lazily by the first [`start_game`](Self::start_game)
/// call and reused for every later round.
pub struct GameSession<D: Dictionary> {
    source: WordSource,
    word_list: Option<WordList>,
    dictionary: D,
    language: String,
    rng: StdRng,
    root_word: String,
    used_words: Vec<String>,
}

impl<D: Dictionary> GameSession<D> {
    /// Create a session that loads its root words from `source` on first start
    pub fn new(source: WordSource, dictionary: D) -> Self {
        Self {
            source,
            word_list: None,
            dictionary,
            language: DEFAULT_LANGUAGE.to_string(),
            rng: StdRng::from_rng(&mut rand::rng()),
            root_word: String::new(),
            used_words: Vec::new(),
        }
    }

    /// Create a session around an already-loaded word list
    pub fn with_word_list(word_list: WordList, dictionary: D) -> Self {
        let mut session = Self::new(WordSource::Embedded, dictionary);
        session.word_list = Some(word_list);
        session
    }

    /// Use `language` for dictionary lookups
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Make root-word selection reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start a new round
    ///
    /// Picks a random root word (or the fallback when the list is empty) and
    /// forgets every word used so far.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WordList` if the root-word list has not been loaded
    /// yet and cannot be read. The session state is left untouched in that case.
    pub fn start_game(&mut self) -> Result<&str, SessionError> {
        let word_list = match self.word_list.take() {
            Some(list) => list,
            None => {
                let list = self.source.load().inspect_err(|err| {
                    log::warn!("word list '{}' unavailable: {err}", self.source);
                })?;
                log::debug!("loaded {} root words from {}", list.len(), self.source);
                list
            }
        };

        if word_list.is_empty() {
            log::warn!("word list '{}' is empty, using fallback root", self.source);
        }
        self.root_word = word_list.choose_root(&mut self.rng).to_string();
        self.used_words.clear();
        self.word_list = Some(word_list);

        log::info!("new round started with root word '{}'", self.root_word);
        Ok(self.root_word.as_str())
    }

    /// Submit a player's word
    ///
    /// Blank input is ignored. Otherwise the normalized word must be original,
    /// composable from the root word, and known to the dictionary, checked in that
    /// order. Accepted words are inserted at the front of the used-word list.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a [`RejectionReason`]; the used-word list
    /// is not modified.
    pub fn submit_word(&mut self, raw: &str) -> Result<Submission, RejectionReason> {
        let answer = normalize(raw);
        if answer.is_empty() {
            return Ok(Submission::Ignored);
        }

        if let Err(reason) = self.validate(&answer) {
            log::debug!("rejected '{answer}': {reason}");
            return Err(reason);
        }

        log::debug!("accepted '{answer}'");
        self.used_words.insert(0, answer.clone());
        Ok(Submission::Accepted(answer))
    }

    fn validate(&self, word: &str) -> Result<(), RejectionReason> {
        if !self.is_original(word) {
            return Err(RejectionReason::AlreadyUsed);
        }
        if !is_composable(word, &self.root_word) {
            return Err(RejectionReason::NotComposableFromRoot);
        }
        if !self.dictionary.is_valid_word(word, &self.language) {
            return Err(RejectionReason::NotARealWord);
        }
        Ok(())
    }

    fn is_original(&self, word: &str) -> bool {
        !self.used_words.iter().any(|used| used == word)
    }

    /// Current root word; empty until the first round starts
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Words accepted this round, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of candidate root words, or `None` before the list is loaded
    #[must_use]
    pub fn word_list_len(&self) -> Option<usize> {
        self.word_list.as_ref().map(WordList::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPool;
    use crate::wordlists::FALLBACK_ROOT;
    use std::path::PathBuf;

    const REAL_WORDS: &[&str] = &[
        "silk", "worm", "milk", "skim", "slim", "works", "silkworm", "owl", "low", "wormslik",
    ];

    fn real_word(word: &str, _language: &str) -> bool {
        REAL_WORDS.contains(&word)
    }

    fn silkworm_session() -> GameSession<fn(&str, &str) -> bool> {
        let list = WordList::from_slice(&["silkworm"]);
        let mut session = GameSession::with_word_list(list, real_word as fn(&str, &str) -> bool);
        session.start_game().unwrap();
        session
    }

    #[test]
    fn start_game_sets_root_and_clears_used() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        assert_eq!(session.used_words().len(), 1);

        let root = session.start_game().unwrap().to_string();
        assert_eq!(root, "silkworm");
        assert_eq!(session.root_word(), "silkworm");
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn root_is_empty_before_first_round() {
        let session = GameSession::new(WordSource::Embedded, real_word);
        assert_eq!(session.root_word(), "");
        assert_eq!(session.word_list_len(), None);
    }

    #[test]
    fn start_game_loads_embedded_list() {
        let mut session = GameSession::new(WordSource::Embedded, real_word).with_seed(1);
        let root = session.start_game().unwrap().to_string();
        assert!(crate::wordlists::START_WORDS.contains(&root.as_str()));
        assert_eq!(
            session.word_list_len(),
            Some(crate::wordlists::START_WORDS_COUNT)
        );
    }

    #[test]
    fn start_game_reuses_loaded_list() {
        let path = std::env::temp_dir().join("word_scramble_reused_roots.txt");
        std::fs::write(&path, "notebook\numbrella\n").unwrap();

        let mut session = GameSession::new(WordSource::File(path.clone()), real_word).with_seed(3);
        session.start_game().unwrap();
        assert_eq!(session.word_list_len(), Some(2));

        // Later rounds must not go back to disk
        std::fs::remove_file(&path).unwrap();
        for _ in 0..3 {
            let root = session.start_game().unwrap().to_string();
            assert!(root == "notebook" || root == "umbrella");
            assert_eq!(session.word_list_len(), Some(2));
        }
    }

    #[test]
    fn start_game_empty_list_uses_fallback() {
        let mut session = GameSession::with_word_list(WordList::default(), real_word);
        assert_eq!(session.start_game().unwrap(), FALLBACK_ROOT);
    }

    #[test]
    fn start_game_missing_file_is_config_error() {
        let path = PathBuf::from("/definitely/not/here/start.txt");
        let mut session = GameSession::new(WordSource::File(path), real_word);

        let err = session.start_game().unwrap_err();
        assert!(matches!(err, SessionError::WordList(_)));
        assert_eq!(session.root_word(), "");
        assert_eq!(session.word_list_len(), None);
    }

    #[test]
    fn seeded_sessions_pick_same_roots() {
        let mut a = GameSession::new(WordSource::Embedded, real_word).with_seed(99);
        let mut b = GameSession::new(WordSource::Embedded, real_word).with_seed(99);
        for _ in 0..5 {
            let root_a = a.start_game().unwrap().to_string();
            let root_b = b.start_game().unwrap().to_string();
            assert_eq!(root_a, root_b);
        }
    }

    #[test]
    fn accepts_real_composable_word() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("silk"),
            Ok(Submission::Accepted("silk".to_string()))
        );
        assert_eq!(session.used_words(), &["silk".to_string()]);
    }

    #[test]
    fn accepted_words_are_most_recent_first() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        session.submit_word("worm").unwrap();
        session.submit_word("milk").unwrap();
        assert_eq!(session.used_words(), &["milk", "worm", "silk"]);
    }

    #[test]
    fn submission_is_normalized() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("  SiLk \n"),
            Ok(Submission::Accepted("silk".to_string()))
        );
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();

        assert_eq!(session.submit_word(""), Ok(Submission::Ignored));
        assert_eq!(session.submit_word("   "), Ok(Submission::Ignored));
        assert_eq!(session.submit_word("\t\n"), Ok(Submission::Ignored));
        assert_eq!(session.used_words(), &["silk".to_string()]);
    }

    #[test]
    fn reused_word_rejected_case_insensitively() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        assert_eq!(
            session.submit_word("Silk"),
            Err(RejectionReason::AlreadyUsed)
        );
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn letter_not_in_root_rejected() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("zzz"),
            Err(RejectionReason::NotComposableFromRoot)
        );
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn letter_used_too_often_rejected() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("wow"),
            Err(RejectionReason::NotComposableFromRoot)
        );
    }

    #[test]
    fn anagram_of_root_reaches_dictionary() {
        // Every letter of the root exactly once: composable, so the dictionary decides
        let list = WordList::from_slice(&["silkworm"]);
        let mut session = GameSession::with_word_list(list, |_: &str, _: &str| false);
        session.start_game().unwrap();
        assert_eq!(
            session.submit_word("wormslik"),
            Err(RejectionReason::NotARealWord)
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("silko"),
            Err(RejectionReason::NotARealWord)
        );
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn originality_checked_before_composability() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        // Still composable, but the duplicate is reported first
        assert_eq!(
            session.submit_word("silk"),
            Err(RejectionReason::AlreadyUsed)
        );
    }

    #[test]
    fn composability_checked_before_dictionary() {
        let list = WordList::from_slice(&["silkworm"]);
        let mut session = GameSession::with_word_list(list, |_: &str, _: &str| -> bool {
            panic!("dictionary must not be consulted")
        });
        session.start_game().unwrap();
        assert_eq!(
            session.submit_word("zebra"),
            Err(RejectionReason::NotComposableFromRoot)
        );
    }

    #[test]
    fn dictionary_receives_configured_language() {
        let list = WordList::from_slice(&["silkworm"]);
        let mut session =
            GameSession::with_word_list(list, |_: &str, language: &str| language == "en-GB")
                .with_language("en-GB");
        session.start_game().unwrap();
        assert_eq!(session.language(), "en-GB");
        assert!(session.submit_word("silk").is_ok());
    }

    #[test]
    fn root_word_itself_is_accepted_when_real() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("silkworm"),
            Ok(Submission::Accepted("silkworm".to_string()))
        );
    }

    #[test]
    fn submission_before_first_round_is_not_composable() {
        let mut session = GameSession::new(WordSource::Embedded, real_word);
        assert_eq!(
            session.submit_word("silk"),
            Err(RejectionReason::NotComposableFromRoot)
        );
    }

    #[test]
    fn accepted_words_fit_in_root_and_are_unique() {
        let mut session = silkworm_session();
        for attempt in ["silk", "SILK", "worm", "zzz", "milk", "works", "skim", "slim", "wow"] {
            let _ = session.submit_word(attempt);
        }

        let used = session.used_words();
        for word in used {
            let mut pool = LetterPool::new(session.root_word());
            assert!(word.chars().all(|c| pool.take(c)), "'{word}' overuses letters");
        }
        let unique: std::collections::HashSet<_> = used.iter().collect();
        assert_eq!(unique.len(), used.len());
    }
}
