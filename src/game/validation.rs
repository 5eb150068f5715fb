//! Word validation for submitted guesses
//!
//! Checks, in order (the first failure decides the rejection):
//! 1. Longer than two letters and not the root word itself
//! 2. Not already accepted this game
//! 3. Spellable from the root word's letters (with multiplicity)
//! 4. A real English word according to the dictionary

use super::dictionary::{WordChecker, ENGLISH};
use super::GameState;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Two letters or fewer, or exactly the root word
    TooShortOrSameAsRoot,
    /// Accepted earlier in this game
    AlreadyUsed,
    /// Uses a letter the root word doesn't have (or has fewer of)
    NotSpellableFromRoot,
    /// The dictionary doesn't know it, or the lookup failed
    NotARealWord,
}

impl Rejection {
    pub fn label(&self) -> &'static str {
        match self {
            Rejection::TooShortOrSameAsRoot => "Too Short Or Same As Root",
            Rejection::AlreadyUsed => "Already Used",
            Rejection::NotSpellableFromRoot => "Not Spellable",
            Rejection::NotARealWord => "Not A Real Word",
        }
    }
}

/// Result of submitting a word. `word` is always the normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { word: String, score: u64 },
    Rejected { word: String, reason: Rejection },
}

#[cfg(test)]
impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn word(&self) -> &str {
        match self {
            SubmitOutcome::Accepted { word, .. } | SubmitOutcome::Rejected { word, .. } => word,
        }
    }
}

/// Lowercase and strip surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check that every letter of `word` can be taken from `root`, each root
/// letter used at most once.
pub fn is_spellable(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();

    for c in word.chars() {
        match available.iter().position(|&r| r == c) {
            Some(pos) => {
                available.remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Validate `raw` against the game and record it when every check passes.
///
/// A dictionary failure counts as [`Rejection::NotARealWord`].
pub fn submit_word(state: &mut GameState, raw: &str, checker: &dyn WordChecker) -> SubmitOutcome {
    let word = normalize(raw);

    match check_word(state, &word, checker) {
        Ok(()) => {
            let score = state.record_accepted_word(&word);
            log::debug!("accepted {:?}, score now {}", word, score);
            SubmitOutcome::Accepted { word, score }
        }
        Err(reason) => {
            log::debug!("rejected {:?}: {}", word, reason.label());
            SubmitOutcome::Rejected { word, reason }
        }
    }
}

fn check_word(state: &GameState, word: &str, checker: &dyn WordChecker) -> Result<(), Rejection> {
    if word.chars().count() < MIN_WORD_LENGTH || word == state.root_word() {
        return Err(Rejection::TooShortOrSameAsRoot);
    }

    if state.has_used(word) {
        return Err(Rejection::AlreadyUsed);
    }

    if !is_spellable(word, state.root_word()) {
        return Err(Rejection::NotSpellableFromRoot);
    }

    match checker.is_known_word(word, ENGLISH) {
        Ok(true) => Ok(()),
        Ok(false) => Err(Rejection::NotARealWord),
        Err(e) => {
            log::warn!("dictionary lookup for {:?} failed: {}", word, e);
            Err(Rejection::NotARealWord)
        }
    }
}
