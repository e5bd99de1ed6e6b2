use crate::types::FrequencyVector;

pub trait FrequencyScorer {
    /// Distance between the expected and observed letter profiles.
    /// Lower means a closer match.
    fn score(&self, expected: &FrequencyVector, actual: &FrequencyVector) -> f64;
}

/// Sum of absolute per-letter differences. No weighting or smoothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct L1Distance;

impl FrequencyScorer for L1Distance {
    fn score(&self, expected: &FrequencyVector, actual: &FrequencyVector) -> f64 {
        expected
            .iter()
            .zip(actual.iter())
            .map(|(e, a)| (e - a).abs())
            .sum()
    }
}

/// L1 distance between two frequency vectors.
pub fn score(expected: &FrequencyVector, actual: &FrequencyVector) -> f64 {
    L1Distance.score(expected, actual)
}
