//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::{Config, ConfigError, MAX_WRONG_GUESSES},
    render::wordlist::Wordlist,
};

/// Hangman in the terminal
#[derive(Parser, Debug)]
#[command(name = "hangman", version, about = "Guess the word one letter at a time")]
pub struct Cli {
    /// Play a single round with this secret word
    #[arg(short, long, conflicts_with = "wordlist")]
    pub word: Option<String>,

    /// Play a single round with a random word from this wordlist (easy, hard)
    #[arg(short = 'l', long)]
    pub wordlist: Option<Wordlist>,

    /// Wrong guesses allowed per round
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub max_misses: Option<u32>,

    /// Write logs to this file; without it logging is off unless RUST_LOG is set
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Play hangman (default)
    Play,
    /// Show two independent sessions being played side by side
    Demo,
}

/// Where the secret word for `play` comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum Source<'a> {
    Word(&'a str),
    Random(Wordlist),
    Menu,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Play)
    }

    pub fn source(&self) -> Source<'_> {
        match (&self.word, self.wordlist) {
            (Some(word), _) => Source::Word(word),
            (None, Some(wordlist)) => Source::Random(wordlist),
            (None, None) => Source::Menu,
        }
    }

    /// Default settings with command line overrides applied.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        if let Some(max_misses) = self.max_misses {
            config.set_int(MAX_WRONG_GUESSES, max_misses as i32)?;
        }
        Ok(config)
    }
}
