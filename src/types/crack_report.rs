use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::ReferenceVersion;
use crate::types::key::Key;

/// Score of one candidate key against the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub key: Key,
    pub score: f64,
}

/// Full outcome of a key search.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackReport {
    pub plaintext: String,
    pub key: Key,
    pub key_letter: char,
    pub score: f64,

    pub reference_version: ReferenceVersion,
    pub letters_considered: usize,

    /// One entry per key, in ascending key order.
    pub candidates: Vec<CandidateScore>,
}

impl CrackReport {
    /// Candidates ordered best first: score ascending, then key ascending.
    pub fn ranked(&self) -> Vec<CandidateScore> {
        let mut ranked = self.candidates.clone();
        ranked.sort_by(|a, b| {
            let score_cmp = a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal);
            if score_cmp != Ordering::Equal {
                score_cmp
            } else {
                a.key.shift().cmp(&b.key.shift())
            }
        });

        debug_assert!(ranked.windows(2).all(|w| {
            let a = &w[0];
            let b = &w[1];
            a.score < b.score || (a.score == b.score && a.key.shift() <= b.key.shift())
        }));

        ranked
    }
}
