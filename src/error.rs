//! Application-level error, the one renderers and `main` propagate with `?`.

use thiserror::Error;

use crate::{
    config::ConfigError,
    render::wordlist::WordlistError,
    tracker::{InvalidGuessError, InvalidWordError},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Wordlist(#[from] WordlistError),

    #[error("invalid secret word: {0}")]
    InvalidWord(#[from] InvalidWordError),

    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] InvalidGuessError),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
