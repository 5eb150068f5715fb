//! Game logic: root word, accepted words, scoring and word validation

pub mod dictionary;
pub mod roots;
pub mod validation;

use std::collections::HashSet;

/// State of one game: the root word, the words accepted so far and the score.
///
/// Only [`validation::submit_word`] records words, so everything in
/// `used_words` has passed every check.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    root_word: String,
    /// Accepted words, most recent first
    used_words: Vec<String>,
    /// Same words as `used_words`, for membership checks
    used_set: HashSet<String>,
    score: u64,
}

impl GameState {
    /// Create a fresh game around `root_word`.
    pub fn new(root_word: &str) -> Self {
        let mut state = Self::default();
        state.reset(root_word);
        state
    }

    /// Start over with a new root word. Clears used words and the score.
    pub fn reset(&mut self, new_root_word: &str) {
        self.root_word = validation::normalize(new_root_word);
        self.used_words.clear();
        self.used_set.clear();
        self.score = 0;
    }

    /// Record a word that passed validation and return the new score.
    ///
    /// Score becomes `(score + 1) * len / 2` with floor division, where `len`
    /// counts characters. On overflow the score stays at `u64::MAX`.
    pub fn record_accepted_word(&mut self, word: &str) -> u64 {
        let length = word.chars().count() as u64;
        self.score = self
            .score
            .checked_add(1)
            .and_then(|s| s.checked_mul(length))
            .map_or(u64::MAX, |s| s / 2);

        self.used_set.insert(word.to_string());
        self.used_words.insert(0, word.to_string());
        self.score
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn has_used(&self, word: &str) -> bool {
        self.used_set.contains(word)
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let state = GameState::new("silkworm");
        assert_eq!(state.root_word(), "silkworm");
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_score_recurrence() {
        let mut state = GameState::new("silkworm");

        // (0 + 1) * 4 / 2
        assert_eq!(state.record_accepted_word("silk"), 2);
        // (2 + 1) * 5 / 2
        assert_eq!(state.record_accepted_word("works"), 7);
        assert_eq!(state.score(), 7);
    }

    #[test]
    fn test_score_truncates() {
        let mut state = GameState::new("silkworm");
        assert_eq!(state.record_accepted_word("wok"), 1);
        // (1 + 1) * 3 / 2
        assert_eq!(state.record_accepted_word("owl"), 3);
    }

    #[test]
    fn test_score_counts_chars_not_bytes() {
        let mut state = GameState::new("crème");
        // four chars, five bytes
        assert_eq!(state.record_accepted_word("rème"), 2);
    }

    #[test]
    fn test_score_holds_at_cap() {
        let mut state = GameState::new("silkworm");
        state.score = u64::MAX / 2;
        assert_eq!(state.record_accepted_word("silk"), u64::MAX);
        assert_eq!(state.record_accepted_word("worm"), u64::MAX);
        assert_eq!(state.record_accepted_word("wok"), u64::MAX);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = GameState::new("silkworm");
        let mut previous = 0;
        for i in 0..200 {
            let word = format!("word{}", i);
            let score = state.record_accepted_word(&word[..3]);
            assert!(score >= previous, "score dropped from {} to {}", previous, score);
            previous = score;
        }
        assert_eq!(previous, u64::MAX);
    }

    #[test]
    fn test_used_words_most_recent_first() {
        let mut state = GameState::new("silkworm");
        state.record_accepted_word("silk");
        state.record_accepted_word("worm");
        state.record_accepted_word("milk");

        assert_eq!(state.used_words(), ["milk", "worm", "silk"]);
        assert!(state.has_used("worm"));
        assert!(!state.has_used("owl"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new("silkworm");
        state.record_accepted_word("silk");

        state.reset("baseball");
        assert_eq!(state.root_word(), "baseball");
        assert!(state.used_words().is_empty());
        assert!(!state.has_used("silk"));
        assert_eq!(state.score(), 0);

        state.reset("thinking");
        assert_eq!(state.root_word(), "thinking");
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_reset_normalizes_root() {
        let mut state = GameState::default();
        state.reset("  SilkWorm\n");
        assert_eq!(state.root_word(), "silkworm");
    }
}
