//! Deterministic Caesar shift cipher engine.
//!
//! `caesar-core` encodes text into a numeric alphabet, applies and reverses a
//! constant rotation, and recovers the plaintext of a shifted message without
//! its key by scoring all 26 rotations against a reference letter-frequency
//! table. All operations are pure: identical inputs always produce identical
//! outputs.
//!
//! ```
//! use caesar_core::analysis::ReferenceTable;
//! use caesar_core::cipher::{decrypt, encrypt};
//! use caesar_core::cracking::crack;
//! use caesar_core::types::Key;
//!
//! assert_eq!(encrypt("Hello", Key::new(3)), "KHOOR");
//! assert_eq!(decrypt("KHOOR", Key::new(3)), "HELLO");
//!
//! let english = ReferenceTable::english();
//! let secret = encrypt("Defend the east wall of the castle at dawn.", Key::new(13));
//! assert_eq!(
//!     crack(&secret, &english.frequencies),
//!     "DEFEND THE EAST WALL OF THE CASTLE AT DAWN."
//! );
//! ```

pub mod analysis;
pub mod cipher;
pub mod codec;
pub mod cracking;
pub mod types;

pub use cipher::{decrypt, encrypt};
pub use cracking::{crack, Cracker};
