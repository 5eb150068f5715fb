//! File logging
//!
//! The terminal belongs to the UI, so records are written to a log file
//! instead of stderr. `RUST_LOG` overrides the level picked here.

use crate::error::GameError;
use std::fs::{self, OpenOptions};
use std::path::Path;

pub fn init(path: &Path, verbose: bool) -> Result<(), GameError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| GameError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
