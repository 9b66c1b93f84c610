//! Game-loop policy on top of a `GuessTracker`: turn counting, the wrong-guess limit, and deciding
//! whether a round was won or lost.

use log::{debug, info};
use thiserror::Error;

use crate::tracker::{parse_letter, GuessResult, GuessTracker, InvalidGuessError, Status};

/// Traditional hangman allows six wrong guesses.
pub const DEFAULT_MAX_MISSES: u32 = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidGuess(#[from] InvalidGuessError),
    #[error("you already guessed '{0}'")]
    AlreadyGuessed(char),
    #[error("the game is already over")]
    Finished,
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// What a single accepted guess did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Normalized letter that was guessed.
    pub letter: char,
    /// Whether the letter occurs in the secret word.
    pub hit: bool,
    /// Tracker state after the guess.
    pub result: GuessResult,
}

/// One round of hangman.
#[derive(Debug, Clone)]
pub struct Game {
    tracker: GuessTracker,
    max_misses: u32,
    misses: u32,
    turns: u32,
}

impl Game {
    pub fn new(tracker: GuessTracker, max_misses: u32) -> Self {
        Self {
            tracker,
            max_misses,
            misses: 0,
            turns: 0,
        }
    }

    /// Plays one guess. Invalid and repeated letters are rejected without using up a turn.
    pub fn guess(&mut self, input: &str) -> Result<Turn, GameError> {
        if self.state() != GameState::Playing {
            return Err(GameError::Finished);
        }

        // validate up front so repeats can be told apart from new letters
        let letter = parse_letter(input)?;
        if self.tracker.has_guessed(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }

        let hit = self.tracker.contains(letter);
        let result = self.tracker.guess_char(letter)?;
        self.turns += 1;
        if !hit {
            self.misses += 1;
        }
        debug!(
            "turn {}: {letter:?} {} ({}/{} misses)",
            self.turns,
            if hit { "hit" } else { "miss" },
            self.misses,
            self.max_misses
        );

        match self.state() {
            GameState::Won => info!("won in {} turns", self.turns),
            GameState::Lost => info!("lost after {} turns", self.turns),
            GameState::Playing => {}
        }

        Ok(Turn {
            letter,
            hit,
            result,
        })
    }

    pub fn state(&self) -> GameState {
        match self.tracker.status() {
            Status::Complete => GameState::Won,
            Status::InProgress if self.misses >= self.max_misses => GameState::Lost,
            Status::InProgress => GameState::Playing,
        }
    }

    pub fn tracker(&self) -> &GuessTracker {
        &self.tracker
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn max_misses(&self) -> u32 {
        self.max_misses
    }

    pub fn misses_left(&self) -> u32 {
        self.max_misses.saturating_sub(self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str, max_misses: u32) -> Game {
        Game::new(GuessTracker::new(word).unwrap(), max_misses)
    }

    #[test]
    fn hits_do_not_count_as_misses() {
        let mut game = game("cat", 3);
        let turn = game.guess("C").unwrap();
        assert_eq!(turn.letter, 'c');
        assert!(turn.hit);
        assert_eq!(turn.result.display, "c__");
        assert_eq!(game.misses(), 0);
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn repeats_are_rejected_without_using_a_turn() {
        let mut game = game("cat", 3);
        game.guess("z").unwrap();
        assert_eq!(game.guess("Z"), Err(GameError::AlreadyGuessed('z')));
        assert_eq!(game.misses(), 1);
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn invalid_input_is_passed_through() {
        let mut game = game("cat", 3);
        assert_eq!(
            game.guess("ab"),
            Err(GameError::InvalidGuess(InvalidGuessError::TooLong(2)))
        );
        assert_eq!(
            game.guess("3"),
            Err(GameError::InvalidGuess(InvalidGuessError::NonAlphabetic('3')))
        );
        assert_eq!(game.turns(), 0);
        assert!(game.tracker().guessed().is_empty());
    }

    #[test]
    fn reaching_the_miss_limit_loses() {
        let mut game = game("cat", 2);
        game.guess("x").unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.misses_left(), 1);
        game.guess("y").unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.misses_left(), 0);
        assert_eq!(game.guess("c"), Err(GameError::Finished));
    }

    #[test]
    fn revealing_the_word_wins() {
        let mut game = game("dog", DEFAULT_MAX_MISSES);
        for c in ["d", "x", "o", "g"] {
            game.guess(c).unwrap();
        }
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.turns(), 4);
        assert_eq!(game.misses(), 1);
        assert_eq!(game.guess("a"), Err(GameError::Finished));
    }

    #[test]
    fn win_on_last_chance() {
        let mut game = game("ab", 1);
        game.guess("a").unwrap();
        let turn = game.guess("b").unwrap();
        assert!(turn.result.complete);
        assert_eq!(game.state(), GameState::Won);
    }
}
