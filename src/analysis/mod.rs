pub mod frequency;
pub mod reference;
pub mod scoring;

pub use frequency::empirical_frequencies;
pub use reference::{
    load_reference_frequencies, ReferenceError, ReferenceTable, ENGLISH_LETTER_FREQUENCIES,
};
pub use scoring::{score, FrequencyScorer, L1Distance};
