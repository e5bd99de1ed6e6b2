use std::fs;
use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::types::{FrequencyVector, ReferenceVersion, ALPHABET_LEN};

/// Relative letter frequencies of English text, A through Z (Lewand, 2000).
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Invalid reference data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid reference data: expected 26 lines, found {found}")]
    TooShort { found: usize },
    #[error("Invalid reference data: line {line} is not a number: {value:?}")]
    NotNumeric { line: usize, value: String },
    #[error("Invalid reference data: line {line} is not a finite non-negative number: {value}")]
    InvalidValue { line: usize, value: f64 },
}

/// Read the 26 expected letter proportions, one per line, A first.
///
/// Lines after the 26th are not read. Values are taken as-is, without
/// re-normalizing their sum.
pub fn load_reference_frequencies<R: BufRead>(
    source: R,
) -> Result<FrequencyVector, ReferenceError> {
    let mut values = [0.0; ALPHABET_LEN];
    let mut found = 0;

    for (slot, line) in values.iter_mut().zip(source.lines()) {
        let line = line?;
        let line_no = found + 1;
        let trimmed = line.trim();

        let value: f64 = trimmed.parse().map_err(|_| ReferenceError::NotNumeric {
            line: line_no,
            value: trimmed.to_string(),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ReferenceError::InvalidValue { line: line_no, value });
        }

        *slot = value;
        found += 1;
    }

    if found < ALPHABET_LEN {
        return Err(ReferenceError::TooShort { found });
    }

    Ok(FrequencyVector::new(values))
}

/// A parsed reference table together with the hash of the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    pub frequencies: FrequencyVector,
    pub version: ReferenceVersion,
}

impl ReferenceTable {
    pub fn from_source(source: &str) -> Result<Self, ReferenceError> {
        let frequencies = load_reference_frequencies(source.as_bytes())?;
        let version = ReferenceVersion::from_content(source.as_bytes());
        tracing::debug!(version = version.as_str(), "loaded reference frequency table");

        Ok(ReferenceTable {
            frequencies,
            version,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ReferenceError> {
        let source = fs::read_to_string(path)?;
        Self::from_source(&source)
    }

    /// The built-in English table. Its version hashes the one-value-per-line
    /// rendering, so it matches a file written in that form.
    pub fn english() -> Self {
        let rendered: String = ENGLISH_LETTER_FREQUENCIES
            .iter()
            .map(|v| format!("{v}\n"))
            .collect();

        ReferenceTable {
            frequencies: FrequencyVector::new(ENGLISH_LETTER_FREQUENCIES),
            version: ReferenceVersion::from_content(rendered.as_bytes()),
        }
    }
}
