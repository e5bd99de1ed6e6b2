use caesar_core::analysis::{empirical_frequencies, score, FrequencyScorer, L1Distance};
use caesar_core::codec::encode;
use caesar_core::types::FrequencyVector;
use proptest::prelude::*;

fn frequencies_of(text: &str) -> FrequencyVector {
    empirical_frequencies(&encode(text))
}

#[test]
fn counts_only_letters() {
    let freq = frequencies_of("a, b! a? 42");

    assert_eq!(freq.get(0), Some(2.0 / 3.0));
    assert_eq!(freq.get(1), Some(1.0 / 3.0));
    for index in 2..26 {
        assert_eq!(freq.get(index), Some(0.0));
    }
    assert_eq!(freq.get(26), None);
}

#[test]
fn text_without_letters_is_all_zero() {
    for text in ["", " ", "12345 !?", "\n\t"] {
        let freq = frequencies_of(text);
        assert!(freq.is_zero(), "{text:?} should have no letters");
        assert_eq!(freq.sum(), 0.0);
    }
}

#[test]
fn score_is_l1_distance() {
    let mut expected = [0.0; 26];
    expected[0] = 0.5;
    expected[1] = 0.5;
    let mut actual = [0.0; 26];
    actual[0] = 1.0;

    let expected = FrequencyVector::new(expected);
    let actual = FrequencyVector::new(actual);

    assert_eq!(score(&expected, &actual), 1.0);
    assert_eq!(L1Distance.score(&expected, &actual), 1.0);
    assert_eq!(score(&expected, &FrequencyVector::zeros()), 1.0);
}

#[test]
fn score_grows_with_divergence() {
    let reference = frequencies_of("aaaab");
    let near = frequencies_of("aaab");
    let far = frequencies_of("abbb");

    assert!(score(&reference, &near) < score(&reference, &far));
}

proptest! {
    #[test]
    fn empirical_vectors_are_proportions(text in any::<String>()) {
        let freq = frequencies_of(&text);

        if text.chars().any(|c| c.is_ascii_alphabetic()) {
            prop_assert!(freq.iter().all(|v| (0.0..=1.0).contains(&v)));
            prop_assert!((freq.sum() - 1.0).abs() < 1e-9);
        } else {
            prop_assert!(freq.iter().all(|v| v == 0.0));
        }
    }

    #[test]
    fn score_is_symmetric_with_zero_self_distance(
        a in prop::array::uniform26(0.0f64..1.0),
        b in prop::array::uniform26(0.0f64..1.0),
    ) {
        let a = FrequencyVector::new(a);
        let b = FrequencyVector::new(b);

        prop_assert_eq!(score(&a, &a), 0.0);
        prop_assert_eq!(score(&a, &b), score(&b, &a));
        prop_assert!(score(&a, &b) >= 0.0);
    }
}
