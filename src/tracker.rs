//! The guessing-game engine. A `GuessTracker` owns one secret word and the set of letters guessed
//! against it, and reports how much of the word is revealed after every guess. It knows nothing
//! about miss limits or turns; see `crate::game` for that.

use std::collections::BTreeSet;

use log::{debug, trace};
use thiserror::Error;

/// Shown in the display form for every letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Returned when a secret word cannot start a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidWordError {
    #[error("secret word is empty")]
    Empty,
    #[error("secret word contains non-letter {0:?}")]
    NonAlphabetic(char),
}

/// Returned when a guess is not exactly one letter. The session is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidGuessError {
    #[error("no letter was given")]
    Empty,
    #[error("expected a single letter, got {0} characters")]
    TooLong(usize),
    #[error("{0:?} is not a letter")]
    NonAlphabetic(char),
}

/// Whether the secret word has been fully revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Complete,
}

/// Snapshot of a session after a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Secret word with unguessed letters replaced by `PLACEHOLDER`.
    pub display: String,
    /// Every letter guessed so far, sorted and deduplicated.
    pub guessed: Vec<char>,
    /// Number of positions in the secret word that are still hidden.
    pub remaining: usize,
    /// True once every distinct letter of the secret word has been guessed.
    pub complete: bool,
}

/// A single hangman session.
#[derive(Debug, Clone)]
pub struct GuessTracker {
    secret: String,
    guessed: BTreeSet<char>,
}

impl GuessTracker {
    /// Starts a session for `secret`. The word is stored lowercased.
    pub fn new(secret: &str) -> Result<Self, InvalidWordError> {
        if secret.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        let secret = secret
            .chars()
            .map(|c| normalize(c).ok_or(InvalidWordError::NonAlphabetic(c)))
            .collect::<Result<String, _>>()?;
        debug!("new session, {} letters", secret.chars().count());
        Ok(Self {
            secret,
            guessed: BTreeSet::new(),
        })
    }

    /// Guesses a letter given as text. Anything other than exactly one letter is rejected before
    /// the guessed set is touched.
    pub fn guess(&mut self, letter: &str) -> Result<GuessResult, InvalidGuessError> {
        self.guess_char(parse_letter(letter)?)
    }

    /// Guesses a single character. Repeats are accepted and change nothing.
    pub fn guess_char(&mut self, letter: char) -> Result<GuessResult, InvalidGuessError> {
        let letter = normalize(letter).ok_or(InvalidGuessError::NonAlphabetic(letter))?;
        if self.guessed.insert(letter) {
            trace!("guessed {letter:?}");
            if self.is_complete() {
                debug!("session complete after {} letters", self.guessed.len());
            }
        }
        Ok(self.snapshot())
    }

    /// Current state without guessing anything.
    pub fn snapshot(&self) -> GuessResult {
        GuessResult {
            display: self.display(),
            guessed: self.guessed(),
            remaining: self.remaining(),
            complete: self.is_complete(),
        }
    }

    /// The normalized secret word.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Length of the secret word in letters.
    pub fn letter_count(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn display(&self) -> String {
        self.secret
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    pub fn guessed(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    pub fn remaining(&self) -> usize {
        self.secret
            .chars()
            .filter(|c| !self.guessed.contains(c))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.secret.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn status(&self) -> Status {
        if self.is_complete() {
            Status::Complete
        } else {
            Status::InProgress
        }
    }

    /// Whether `letter` occurs in the secret word, ignoring case.
    pub fn contains(&self, letter: char) -> bool {
        normalize(letter).is_some_and(|l| self.secret.contains(l))
    }

    /// Whether `letter` has already been guessed, ignoring case.
    pub fn has_guessed(&self, letter: char) -> bool {
        normalize(letter).is_some_and(|l| self.guessed.contains(&l))
    }
}

/// Checks that `input` is exactly one letter and returns it lowercased.
pub fn parse_letter(input: &str) -> Result<char, InvalidGuessError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(InvalidGuessError::Empty),
        (Some(c), None) => normalize(c).ok_or(InvalidGuessError::NonAlphabetic(c)),
        (Some(_), Some(_)) => Err(InvalidGuessError::TooLong(input.chars().count())),
    }
}

/// Lowercases a letter. Returns `None` for non-letters and for letters whose lowercase form is
/// more than one character, since those cannot occupy a single position.
pub fn normalize(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess_all(tracker: &mut GuessTracker, letters: &str) -> GuessResult {
        let mut last = tracker.snapshot();
        for c in letters.chars() {
            last = tracker.guess_char(c).unwrap();
        }
        last
    }

    #[test]
    fn cat_is_revealed_letter_by_letter() {
        let mut tracker = GuessTracker::new("cat").unwrap();
        let result = guess_all(&mut tracker, "ca");
        assert_eq!(result.display, "ca_");
        assert!(!result.complete);
        assert_eq!(result.remaining, 1);
        assert_eq!(tracker.status(), Status::InProgress);

        let result = tracker.guess("t").unwrap();
        assert_eq!(result.display, "cat");
        assert!(result.complete);
        assert_eq!(result.remaining, 0);
        assert_eq!(result.guessed, vec!['a', 'c', 't']);
        assert_eq!(tracker.status(), Status::Complete);
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert_eq!(GuessTracker::new("").unwrap_err(), InvalidWordError::Empty);
    }

    #[test]
    fn secret_with_digits_or_spaces_is_rejected() {
        assert_eq!(
            GuessTracker::new("r2d2").unwrap_err(),
            InvalidWordError::NonAlphabetic('2')
        );
        assert_eq!(
            GuessTracker::new("ice cream").unwrap_err(),
            InvalidWordError::NonAlphabetic(' ')
        );
    }

    #[test]
    fn bad_guess_leaves_session_untouched() {
        let mut tracker = GuessTracker::new("dog").unwrap();
        assert_eq!(tracker.guess("12"), Err(InvalidGuessError::TooLong(2)));
        assert_eq!(tracker.guess(""), Err(InvalidGuessError::Empty));
        assert_eq!(tracker.guess("?"), Err(InvalidGuessError::NonAlphabetic('?')));
        assert!(tracker.guessed().is_empty());
        assert_eq!(tracker.display(), "___");
    }

    #[test]
    fn secret_is_lowercased() {
        let tracker = GuessTracker::new("Python").unwrap();
        assert_eq!(tracker.secret(), "python");
        assert_eq!(tracker.letter_count(), 6);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut twice = GuessTracker::new("Python").unwrap();
        twice.guess("P").unwrap();
        let twice = twice.guess("p").unwrap();

        let mut once = GuessTracker::new("Python").unwrap();
        let once = once.guess("p").unwrap();

        assert_eq!(twice, once);
        assert_eq!(once.display, "p_____");
        assert_eq!(once.guessed, vec!['p']);
    }

    #[test]
    fn remaining_counts_positions_not_distinct_letters() {
        let mut tracker = GuessTracker::new("banana").unwrap();
        let result = tracker.guess("b").unwrap();
        assert_eq!(result.remaining, 5);
        let result = tracker.guess("a").unwrap();
        assert_eq!(result.display, "ba_a_a");
        assert_eq!(result.remaining, 2);
    }

    #[test]
    fn wrong_letters_do_not_block_completion() {
        let mut tracker = GuessTracker::new("hi").unwrap();
        let result = guess_all(&mut tracker, "xyzqhi");
        assert!(result.complete);
        assert_eq!(result.guessed, vec!['h', 'i', 'q', 'x', 'y', 'z']);
    }

    #[test]
    fn complete_is_terminal() {
        let mut tracker = GuessTracker::new("ox").unwrap();
        guess_all(&mut tracker, "ox");
        for c in "abcdefg".chars() {
            assert!(tracker.guess_char(c).unwrap().complete);
        }
        assert_eq!(tracker.status(), Status::Complete);
    }

    #[test]
    fn contains_and_has_guessed_ignore_case() {
        let mut tracker = GuessTracker::new("Rust").unwrap();
        assert!(tracker.contains('R'));
        assert!(!tracker.contains('z'));
        assert!(!tracker.contains('1'));
        tracker.guess("u").unwrap();
        assert!(tracker.has_guessed('U'));
        assert!(!tracker.has_guessed('s'));
    }

    #[test]
    fn non_ascii_letters_are_letters() {
        let mut tracker = GuessTracker::new("Ärger").unwrap();
        assert_eq!(tracker.secret(), "ärger");
        assert_eq!(tracker.guess("Ä").unwrap().display, "ä____");
    }

    #[test]
    fn letters_without_single_lowercase_are_rejected() {
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(normalize('İ'), None);
        assert_eq!(
            GuessTracker::new("İstanbul").unwrap_err(),
            InvalidWordError::NonAlphabetic('İ')
        );
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = GuessTracker::new("python").unwrap();
        let mut second = GuessTracker::new("closure").unwrap();
        first.guess("p").unwrap();
        second.guess("c").unwrap();
        assert_eq!(first.guessed(), vec!['p']);
        assert_eq!(second.guessed(), vec!['c']);
        assert_eq!(first.guess("t").unwrap().display, "p_t___");
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        fn arb_secret() -> impl Strategy<Value = String> {
            "[a-zA-Z]{1,12}"
        }

        fn arb_guesses() -> impl Strategy<Value = Vec<char>> {
            prop::collection::vec(prop::char::range('a', 'z'), 0..40)
        }

        proptest! {
            #[test]
            fn guessed_set_only_grows(secret in arb_secret(), guesses in arb_guesses()) {
                let mut tracker = GuessTracker::new(&secret).unwrap();
                let mut previous: Vec<char> = vec![];
                for g in guesses {
                    let result = tracker.guess_char(g).unwrap();
                    prop_assert!(previous.iter().all(|p| result.guessed.contains(p)));
                    prop_assert!(result.guessed.contains(&g));
                    previous = result.guessed;
                }
            }

            #[test]
            fn repeated_guess_is_idempotent(secret in arb_secret(), guesses in arb_guesses(), extra in prop::char::range('a', 'z')) {
                let mut tracker = GuessTracker::new(&secret).unwrap();
                for g in guesses {
                    tracker.guess_char(g).unwrap();
                }
                let first = tracker.guess_char(extra).unwrap();
                let second = tracker.guess_char(extra).unwrap();
                let third = tracker.guess_char(extra.to_ascii_uppercase()).unwrap();
                prop_assert_eq!(&first, &second);
                prop_assert_eq!(&second, &third);
            }

            #[test]
            fn complete_iff_all_secret_letters_guessed(secret in arb_secret(), guesses in arb_guesses()) {
                let mut tracker = GuessTracker::new(&secret).unwrap();
                let mut result = tracker.snapshot();
                for g in &guesses {
                    result = tracker.guess_char(*g).unwrap();
                }
                let expected = secret
                    .to_lowercase()
                    .chars()
                    .all(|c| guesses.contains(&c));
                prop_assert_eq!(result.complete, expected);
                prop_assert_eq!(result.complete, result.remaining == 0);
            }

            #[test]
            fn display_matches_secret_shape(secret in arb_secret(), guesses in arb_guesses()) {
                let mut tracker = GuessTracker::new(&secret).unwrap();
                for g in &guesses {
                    tracker.guess_char(*g).unwrap();
                }
                let display = tracker.display();
                let normalized = secret.to_lowercase();
                prop_assert_eq!(display.chars().count(), normalized.chars().count());
                for (shown, actual) in display.chars().zip(normalized.chars()) {
                    if guesses.contains(&actual) {
                        prop_assert_eq!(shown, actual);
                    } else {
                        prop_assert_eq!(shown, PLACEHOLDER);
                    }
                }
            }

            #[test]
            fn rejected_guess_changes_nothing(secret in arb_secret(), bad in "[0-9 ?!]|[a-z]{2,4}") {
                let mut tracker = GuessTracker::new(&secret).unwrap();
                tracker.guess("e").unwrap();
                let before = tracker.snapshot();
                prop_assert!(tracker.guess(&bad).is_err());
                prop_assert_eq!(tracker.snapshot(), before);
            }
        }
    }
}
