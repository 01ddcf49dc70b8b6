//! Errors raised while producing the secret word.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a word list or choosing a word from it.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The word file does not exist
    #[error("word file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// There is nothing to select from
    #[error("word list is empty")]
    EmptyWordList,

    /// The selected token has no characters (e.g. produced by a doubled space)
    #[error("selected word is empty")]
    EmptySecretWord,

    /// Any other failure while reading the word file
    #[error("failed to read word file: {0}")]
    Io(#[from] io::Error),
}

/// Errors that abort game setup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    WordSource(#[from] WordSourceError),

    /// Reading a prompt answer or writing a prompt failed
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}
