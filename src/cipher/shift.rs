use crate::codec::{decode, encode};
use crate::types::{Key, Symbol, ALPHABET_LEN};

/// Rotate a letter symbol forward by `offset`; non-letters pass through.
pub fn shift_symbol(symbol: Symbol, offset: i64) -> Symbol {
    match symbol.letter_index() {
        Some(index) => Symbol::letter(index as i64 + offset.rem_euclid(ALPHABET_LEN as i64)),
        None => symbol,
    }
}

/// Rotate a letter symbol backward by `offset`; non-letters pass through.
pub fn unshift_symbol(symbol: Symbol, offset: i64) -> Symbol {
    match symbol.letter_index() {
        Some(index) => Symbol::letter(index as i64 - offset.rem_euclid(ALPHABET_LEN as i64)),
        None => symbol,
    }
}

/// Encrypt `text` with a Caesar shift. Letters come back uppercased.
pub fn encrypt(text: &str, key: Key) -> String {
    let shifted: Vec<Symbol> = encode(text)
        .into_iter()
        .map(|s| shift_symbol(s, key.shift()))
        .collect();
    decode(&shifted)
}

/// Reverse [`encrypt`]: `decrypt(&encrypt(t, k), k)` is `t` uppercased.
pub fn decrypt(text: &str, key: Key) -> String {
    let unshifted: Vec<Symbol> = encode(text)
        .into_iter()
        .map(|s| unshift_symbol(s, key.shift()))
        .collect();
    decode(&unshifted)
}
