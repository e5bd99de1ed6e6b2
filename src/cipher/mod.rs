pub mod shift;

pub use shift::{decrypt, encrypt, shift_symbol, unshift_symbol};
