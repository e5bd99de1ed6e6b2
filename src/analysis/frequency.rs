use crate::types::{FrequencyVector, Symbol, ALPHABET_LEN};

/// Proportion of each letter among the letter symbols of `symbols`.
///
/// Non-letter symbols count toward neither the numerator nor the total.
/// A sequence without letters yields all zeros.
pub fn empirical_frequencies(symbols: &[Symbol]) -> FrequencyVector {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut total_letters = 0usize;

    for index in symbols.iter().filter_map(|s| s.letter_index()) {
        counts[index] += 1;
        total_letters += 1;
    }

    if total_letters == 0 {
        return FrequencyVector::zeros();
    }

    let mut frequencies = [0.0; ALPHABET_LEN];
    for (slot, count) in frequencies.iter_mut().zip(counts) {
        *slot = count as f64 / total_letters as f64;
    }

    let vector = FrequencyVector::new(frequencies);
    debug_assert!(
        (vector.sum() - 1.0).abs() < 1e-9,
        "frequencies sum to {} instead of 1.0",
        vector.sum()
    );
    vector
}
