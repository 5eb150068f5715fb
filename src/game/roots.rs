//! Root word selection
//!
//! Root words come from a newline-separated list, either the one embedded at
//! build time or a file given on the command line. A missing or empty list
//! never stops the game: picks fall back to [`DEFAULT_ROOT_WORD`].

use crate::error::GameError;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Root word used when no list is available
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Embedded start words, one per line
static START_WORDS: &str = include_str!("../../data/start.txt");

/// Something that hands out root words for new games.
pub trait RootWordSource {
    fn pick_root_word(&mut self) -> String;
}

/// A list of candidate root words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse newline-separated text. Entries are trimmed and lowercased,
    /// blank lines (including a trailing newline) are dropped.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self { words }
    }

    /// The start words compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(START_WORDS)
    }

    /// Read a word list file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GameError::WordFile {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&content);
        log::info!("loaded {} root words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Picks root words uniformly at random from a [`WordList`].
pub struct RootWords<R: Rng> {
    list: WordList,
    rng: R,
}

impl<R: Rng> RootWords<R> {
    pub fn with_rng(list: WordList, rng: R) -> Self {
        if list.is_empty() {
            log::warn!("root word list is empty; every game will use {:?}", DEFAULT_ROOT_WORD);
        }
        Self { list, rng }
    }
}

impl RootWords<StdRng> {
    /// Deterministic picks (for testing/seeding).
    pub fn seeded(list: WordList, seed: u64) -> Self {
        Self::with_rng(list, StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng(list: WordList) -> Self {
        Self::with_rng(list, StdRng::from_os_rng())
    }
}

impl<R: Rng> RootWordSource for RootWords<R> {
    fn pick_root_word(&mut self) -> String {
        self.list
            .words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string())
    }
}

/// Load the root word list at `path`, or the embedded one when no path is
/// given or the file can't be read.
pub fn load_root_words(path: Option<&Path>) -> WordList {
    match path.map(WordList::from_file) {
        Some(Ok(list)) if !list.is_empty() => list,
        Some(Ok(_)) => {
            log::warn!("root word file has no words; using embedded list");
            WordList::embedded()
        }
        Some(Err(e)) => {
            log::warn!("{}; using embedded list", e);
            WordList::embedded()
        }
        None => WordList::embedded(),
    }
}
