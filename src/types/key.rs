use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::symbol::{Symbol, ALPHABET_LEN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid key {0:?}: expected a single letter A-Z")]
    InvalidKey(String),
}

/// Rotation amount. Any integer is accepted; only its value modulo 26 matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(i64);

impl Key {
    pub const IDENTITY: Key = Key(0);

    pub fn new(shift: i64) -> Self {
        Key(shift)
    }

    /// Key whose shift is the symbol value of `letter` (`'A'` is 0, `'d'` is 3).
    pub fn from_letter(letter: char) -> Result<Self, KeyError> {
        if !letter.is_ascii_alphabetic() {
            return Err(KeyError::InvalidKey(letter.to_string()));
        }
        Ok(Key(Symbol::from_char(letter).value() as i64))
    }

    pub fn shift(self) -> i64 {
        self.0
    }

    /// Shift normalized into `0..=25`.
    pub fn offset(self) -> i64 {
        self.0.rem_euclid(ALPHABET_LEN as i64)
    }

    /// Uppercase letter naming the normalized key.
    pub fn letter(self) -> char {
        Symbol::letter(self.0).to_char()
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Key::from_letter(letter).map_err(|_| KeyError::InvalidKey(s.to_string()))
            }
            _ => Err(KeyError::InvalidKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.offset(), self.letter())
    }
}
