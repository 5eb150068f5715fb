//! Dictionary module for word validation
//!
//! The validator only sees the [`WordChecker`] trait, so any source of
//! "is this a real word" answers can be plugged in. [`Dictionary`] is the
//! bundled one: a hash set of lowercase words, either the embedded list or a
//! newline-separated file.

use crate::error::{DictionaryError, GameError};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Language tag the validator asks for
pub const ENGLISH: &str = "en";

/// Embedded English wordlist, lowercase, alphabetic only, one word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_words(WORDS_DATA.lines()));

/// Something that can tell whether a word is a real word in a language.
pub trait WordChecker {
    fn is_known_word(&self, word: &str, language: &str) -> Result<bool, DictionaryError>;
}

/// English word set with case-insensitive lookup. Clones share the set.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Arc<HashSet<String>>,
}

impl Dictionary {
    /// Build from any list of words. Entries are trimmed and lowercased;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self {
            words: Arc::new(words),
        }
    }

    /// The dictionary compiled into the binary (English, all regional
    /// spellings, ~109K words). Built once and shared.
    pub fn embedded() -> Self {
        EMBEDDED.clone()
    }

    /// Load a newline-separated word file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GameError::WordFile {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(content.lines());
        if dictionary.is_empty() {
            return Err(GameError::EmptyWordFile(path.to_path_buf()));
        }

        log::info!("loaded {} dictionary words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Check if a word is in the dictionary. Case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.trim().to_lowercase();
        self.words.contains(lower.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordChecker for Dictionary {
    fn is_known_word(&self, word: &str, language: &str) -> Result<bool, DictionaryError> {
        if !language.eq_ignore_ascii_case(ENGLISH) {
            return Err(DictionaryError::UnsupportedLanguage(language.to_string()));
        }
        if self.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(self.contains(word))
    }
}

/// Load the dictionary at `path`, or the embedded one when no path is given
/// or the file can't be used.
pub fn load_dictionary(path: Option<&Path>) -> Dictionary {
    match path.map(Dictionary::from_file) {
        Some(Ok(dictionary)) => dictionary,
        Some(Err(e)) => {
            log::warn!("{}; using embedded dictionary", e);
            Dictionary::embedded()
        }
        None => Dictionary::embedded(),
    }
}
