use serde::{Deserialize, Serialize};

use crate::types::symbol::ALPHABET_LEN;

/// Letter proportions indexed A=0 through Z=25.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyVector([f64; ALPHABET_LEN]);

impl FrequencyVector {
    pub fn new(values: [f64; ALPHABET_LEN]) -> Self {
        FrequencyVector(values)
    }

    pub fn zeros() -> Self {
        FrequencyVector([0.0; ALPHABET_LEN])
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_array(&self) -> &[f64; ALPHABET_LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }
}
