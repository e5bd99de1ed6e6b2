pub mod crack_report;
pub mod frequency;
pub mod identifiers;
pub mod key;
pub mod symbol;

pub use crack_report::{CandidateScore, CrackReport};
pub use frequency::FrequencyVector;
pub use identifiers::ReferenceVersion;
pub use key::{Key, KeyError};
pub use symbol::{CodecError, Symbol, ALPHABET_LEN};
