//! Text to symbol conversion.
//!
//! The mapping is plain arithmetic on code points, so `decode` inverts
//! `encode` for every character, letters or not.

use crate::types::Symbol;

/// Encode `text` into one symbol per character, uppercasing ASCII letters.
pub fn encode(text: &str) -> Vec<Symbol> {
    text.chars().map(Symbol::from_char).collect()
}

/// Decode symbols back into text.
pub fn decode(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}
