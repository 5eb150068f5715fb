//! Application state management

use crate::game::dictionary::WordChecker;
use crate::game::roots::RootWordSource;
use crate::game::validation::{submit_word, Rejection, SubmitOutcome};
use crate::game::GameState;

/// A modal message shown after a rejected word, dismissed with "OK".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Title and message for a rejected `word` in a game rooted at `root`.
    pub fn for_rejection(reason: Rejection, word: &str, root: &str) -> Self {
        let (title, message) = match reason {
            Rejection::TooShortOrSameAsRoot => (
                "Not a valid word",
                format!("Your word is either short or the same as {}", root.to_uppercase()),
            ),
            Rejection::AlreadyUsed => ("Word used already", "Be more original!".to_string()),
            Rejection::NotSpellableFromRoot => (
                "Word not possible",
                format!("You can't spell that word from {}!", root),
            ),
            Rejection::NotARealWord => (
                "Word is not real",
                format!("{} is not a real word in english!", word),
            ),
        };

        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current user input
    pub input: String,
    /// Alert raised by the last rejected submission
    pub alert: Option<Alert>,
    game: GameState,
    checker: Box<dyn WordChecker>,
    roots: Box<dyn RootWordSource>,
}

impl App {
    /// Create the application and start the first game.
    pub fn new(checker: Box<dyn WordChecker>, mut roots: Box<dyn RootWordSource>) -> Self {
        let root = roots.pick_root_word();
        log::info!("new game with root word {:?}", root);

        Self {
            should_quit: false,
            input: String::new(),
            alert: None,
            game: GameState::new(&root),
            checker,
            roots,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start a new game with a fresh root word
    pub fn restart(&mut self) {
        let root = self.roots.pick_root_word();
        log::info!("new game with root word {:?}", root);
        self.game.reset(&root);
        self.input.clear();
        self.alert = None;
    }

    /// Handle character input (ignored while an alert is open)
    pub fn on_char(&mut self, c: char) {
        if self.alert.is_some() {
            return;
        }
        self.input.push(c);
    }

    /// Handle backspace (ignored while an alert is open)
    pub fn on_backspace(&mut self) {
        if self.alert.is_some() {
            return;
        }
        self.input.pop();
    }

    /// Handle word submission (Enter key)
    pub fn on_submit(&mut self) {
        if self.alert.is_some() || self.input.is_empty() {
            return;
        }

        match submit_word(&mut self.game, &self.input, self.checker.as_ref()) {
            SubmitOutcome::Accepted { .. } => {
                self.input.clear();
            }
            SubmitOutcome::Rejected { word, reason } => {
                self.alert = Some(Alert::for_rejection(reason, &word, self.game.root_word()));
            }
        }
    }

    /// Close the current alert ("OK")
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn root_word(&self) -> &str {
        self.game.root_word()
    }

    pub fn used_words(&self) -> &[String] {
        self.game.used_words()
    }

    pub fn score(&self) -> u64 {
        self.game.score()
    }
}
