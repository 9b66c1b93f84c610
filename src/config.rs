use std::{collections::HashMap, fmt::Display};

use log::debug;
use thiserror::Error;

use crate::game::DEFAULT_MAX_MISSES;

/// Wrong guesses allowed per round.
pub const MAX_WRONG_GUESSES: &str = "max wrong guesses";
/// Whether the guessed letters are listed under the word.
pub const SHOW_GUESSED_LETTERS: &str = "show guessed letters";
/// Whether the secret word is shown after a lost round.
pub const REVEAL_WORD_ON_LOSS: &str = "reveal word on loss";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no element '{0}' found in configuration map")]
    MissingKey(String),
    #[error("configuration item '{0}' is not a {1}")]
    WrongType(String, &'static str),
}

/// Stores all values that are configurable. The default variant of this struct is how hangman will
/// work with completely default settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub map: HashMap<String, ConfigValue>,
}

impl Default for Config {
    fn default() -> Self {
        use ConfigValue::*;
        let map = [
            (
                MAX_WRONG_GUESSES,
                Integer {
                    v: DEFAULT_MAX_MISSES as i32,
                    max: 12,
                    min: 1,
                },
            ),
            (SHOW_GUESSED_LETTERS, Bool(true)),
            (REVEAL_WORD_ON_LOSS, Bool(true)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect();
        Self { map }
    }
}

impl Config {
    /// Get raw config values by key.
    pub fn get(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.map
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_owned()))
    }

    /// Get config values by key, boolean only.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key)? {
            ConfigValue::Bool(v) => Ok(*v),
            _ => Err(ConfigError::WrongType(key.to_owned(), "boolean")),
        }
    }

    /// Get config values by key, integer only.
    pub fn get_int(&self, key: &str) -> Result<i32, ConfigError> {
        match self.get(key)? {
            ConfigValue::Integer { v, .. } => Ok(*v),
            _ => Err(ConfigError::WrongType(key.to_owned(), "integer")),
        }
    }

    /// Set the given key to the given value. For integers only `v` is taken: the `max` and `min`
    /// passed in are ignored and the value is clamped to the range already stored for that key.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<(), ConfigError> {
        let current = self
            .map
            .get_mut(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_owned()))?;
        *current = match (&*current, value) {
            (ConfigValue::Bool(_), ConfigValue::Bool(v)) => ConfigValue::Bool(v),
            (ConfigValue::Integer { max, min, .. }, ConfigValue::Integer { v, .. }) => {
                ConfigValue::Integer {
                    v: v.clamp(*min, *max),
                    max: *max,
                    min: *min,
                }
            }
            (ConfigValue::Bool(_), _) => {
                return Err(ConfigError::WrongType(key.to_owned(), "boolean"))
            }
            (ConfigValue::Integer { .. }, _) => {
                return Err(ConfigError::WrongType(key.to_owned(), "integer"))
            }
        };
        debug!("config '{key}' set to {current}");
        Ok(())
    }

    /// Sets an integer value, clamped to the range stored for that key.
    pub fn set_int(&mut self, key: &str, v: i32) -> Result<(), ConfigError> {
        let (max, min) = match self.get(key)? {
            ConfigValue::Integer { max, min, .. } => (*max, *min),
            _ => return Err(ConfigError::WrongType(key.to_owned(), "integer")),
        };
        self.set(key, ConfigValue::Integer { v, max, min })
    }

    /// Flips a boolean value.
    pub fn toggle(&mut self, key: &str) -> Result<(), ConfigError> {
        let v = self.get_bool(key)?;
        self.set(key, ConfigValue::Bool(!v))
    }

    /// Increments an integer value, wrapping back to its minimum past the maximum.
    pub fn increment(&mut self, key: &str) -> Result<(), ConfigError> {
        let (v, max, min) = match self.get(key)? {
            ConfigValue::Integer { v, max, min } => (*v, *max, *min),
            _ => return Err(ConfigError::WrongType(key.to_owned(), "integer")),
        };
        self.set_int(key, if v >= max { min } else { v + 1 })
    }

    /// Miss limit as the game wants it.
    pub fn max_misses(&self) -> Result<u32, ConfigError> {
        Ok(self.get_int(MAX_WRONG_GUESSES)?.max(1) as u32)
    }

    /// Labels and values in a stable order, for the settings menu.
    pub fn entries(&self) -> Vec<(&str, &ConfigValue)> {
        let mut entries = self
            .map
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Integer { v: i32, max: i32, min: i32 },
}

impl Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ConfigValue::*;
        match *self {
            Bool(v) => write!(f, "{}", v),
            Integer { v, .. } => write!(f, "{}", v),
        }
    }
}
