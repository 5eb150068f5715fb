//! Command line configuration

use crate::error::GameError;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "word_scramble";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "word_scramble")]
#[command(about = "Make as many words as you can from a random root word")]
pub struct Args {
    /// Root word list, one word per line (default: built-in list)
    #[arg(short, long, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Dictionary file, one word per line (default: built-in dictionary)
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Seed for picking root words
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log file (default: word_scramble.log in the data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Where log records go: `--log-file`, or the OS data directory.
    pub fn log_path(&self) -> Result<PathBuf, GameError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => data_dir().map(|dir| dir.join(format!("{}.log", APP_NAME))),
        }
    }
}

/// OS-standard data directory:
/// - Linux: `$XDG_DATA_HOME/word_scramble/` or `~/.local/share/word_scramble/`
/// - macOS: `~/Library/Application Support/word_scramble/`
pub fn data_dir() -> Result<PathBuf, GameError> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(GameError::NoDataDirectory)
}
