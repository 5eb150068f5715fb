//! Error types for the fallible edges of the game: word files, the log file
//! and the terminal. Rejected guesses are not errors, see
//! [`crate::game::validation::SubmitOutcome`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("could not read word file {path}")]
    WordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word file {0} contains no words")]
    EmptyWordFile(PathBuf),
    #[error("could not determine data directory")]
    NoDataDirectory,
    #[error("could not open log file {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Failures reported by a [`crate::game::dictionary::WordChecker`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("dictionary has no words for language {0:?}")]
    UnsupportedLanguage(String),
    #[error("dictionary has no words loaded")]
    Empty,
}
