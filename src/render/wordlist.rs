use flate2::bufread::GzDecoder;
use log::debug;
use rand::prelude::IndexedRandom;
use std::io::Read;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::tracker::GuessTracker;

/// English, short common words
pub const ENG_EASY: &[u8] = include_bytes!("../../wordlist/eng_easy.txt.gz");

/// English, long and awkwardly spelled words
pub const ENG_HARD: &[u8] = include_bytes!("../../wordlist/eng_hard.txt.gz");

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to decompress wordlist: {0}")]
    Decompress(#[from] std::io::Error),
    #[error("wordlist {0} has no usable words")]
    Empty(Wordlist),
}

/// Represents wordlists without carrying their data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum Wordlist {
    #[strum(to_string = "easy", serialize = "EnglishEasy")]
    EnglishEasy,
    #[strum(to_string = "hard", serialize = "EnglishHard")]
    EnglishHard,
}

/// Converts enum to wordlist content.
pub fn get_wordlist_content(wordlist: Wordlist) -> Result<String, WordlistError> {
    let mut decoder = match wordlist {
        Wordlist::EnglishEasy => GzDecoder::new(ENG_EASY),
        Wordlist::EnglishHard => GzDecoder::new(ENG_HARD),
    };
    let mut buf = String::new();
    decoder.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Split a string into a vector of its lines.
pub fn str_to_tokens(src: &str) -> Vec<&str> {
    src.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<&str>>()
}

/// Pick a random word from `wordlist` that can be used as a secret.
pub fn random_secret(wordlist: Wordlist) -> Result<String, WordlistError> {
    let content = get_wordlist_content(wordlist)?;
    let tokens = str_to_tokens(&content)
        .into_iter()
        .filter(|t| GuessTracker::new(t).is_ok())
        .collect::<Vec<&str>>();
    debug!("{wordlist}: {} candidate words", tokens.len());
    tokens
        .choose(&mut rand::rng())
        .map(|t| t.to_string())
        .ok_or(WordlistError::Empty(wordlist))
}
