use thiserror::Error;

/// Number of letters in the alphabet the cipher rotates.
pub const ALPHABET_LEN: usize = 26;

const BASE: i32 = 'A' as i32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Symbol {0} does not map to a character")]
    InvalidSymbol(i32),
}

/// Integer encoding of one character: uppercased code point minus `'A'`.
///
/// Letters occupy `0..=25`. Every other character lands outside that range,
/// which is the only letter/non-letter distinction the cipher makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(i32);

impl Symbol {
    pub fn from_char(c: char) -> Self {
        Symbol(c.to_ascii_uppercase() as i32 - BASE)
    }

    pub fn to_char(self) -> char {
        // Values are either produced from a char or rotated within 0..=25,
        // both of which stay valid scalar values.
        char::from_u32((self.0 + BASE) as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Position in the alphabet when this symbol is a letter.
    pub fn letter_index(self) -> Option<usize> {
        if self.is_letter() {
            Some(self.0 as usize)
        } else {
            None
        }
    }

    pub fn is_letter(self) -> bool {
        (0..ALPHABET_LEN as i32).contains(&self.0)
    }

    /// Letter symbol for an alphabet index; the index is reduced modulo 26.
    pub(crate) fn letter(index: i64) -> Self {
        Symbol(index.rem_euclid(ALPHABET_LEN as i64) as i32)
    }
}

impl TryFrom<i32> for Symbol {
    type Error = CodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let code = value
            .checked_add(BASE)
            .and_then(|c| u32::try_from(c).ok())
            .ok_or(CodecError::InvalidSymbol(value))?;
        char::from_u32(code)
            .map(|_| Symbol(value))
            .ok_or(CodecError::InvalidSymbol(value))
    }
}
