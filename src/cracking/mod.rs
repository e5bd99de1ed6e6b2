use crate::analysis::{empirical_frequencies, FrequencyScorer, L1Distance, ReferenceTable};
use crate::cipher::decrypt;
use crate::codec::encode;
use crate::types::{CandidateScore, CrackReport, FrequencyVector, Key, ALPHABET_LEN};

pub struct Cracker<S> {
    scorer: S,
}

impl Default for Cracker<L1Distance> {
    fn default() -> Self {
        Self {
            scorer: L1Distance,
        }
    }
}

struct SearchOutcome {
    key: Key,
    plaintext: String,
    score: f64,
    candidates: Vec<CandidateScore>,
}

impl<S> Cracker<S>
where
    S: FrequencyScorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Most English-like decryption of `cipher_text`.
    pub fn crack(&self, cipher_text: &str, reference: &FrequencyVector) -> String {
        self.search(cipher_text, reference).plaintext
    }

    /// Same search as [`Cracker::crack`], keeping every candidate score.
    pub fn crack_report(&self, cipher_text: &str, reference: &ReferenceTable) -> CrackReport {
        let SearchOutcome {
            key,
            plaintext,
            score,
            candidates,
        } = self.search(cipher_text, &reference.frequencies);

        let letters_considered = encode(cipher_text)
            .into_iter()
            .filter(|s| s.is_letter())
            .count();

        CrackReport {
            plaintext,
            key,
            key_letter: key.letter(),
            score,
            reference_version: reference.version.clone(),
            letters_considered,
            candidates,
        }
    }

    fn evaluate(
        &self,
        cipher_text: &str,
        reference: &FrequencyVector,
        key: Key,
    ) -> (String, f64) {
        let decrypted = decrypt(cipher_text, key);
        let actual = empirical_frequencies(&encode(&decrypted));
        let score = self.scorer.score(reference, &actual);

        tracing::trace!(key = key.shift(), score, "scored candidate key");
        (decrypted, score)
    }

    // Key 0 seeds the best candidate, then keys 1..=25 follow in ascending
    // order. Only a strictly lower score replaces the current best, so ties
    // go to the smallest key.
    fn search(&self, cipher_text: &str, reference: &FrequencyVector) -> SearchOutcome {
        let mut candidates = Vec::with_capacity(ALPHABET_LEN);

        let mut best_key = Key::IDENTITY;
        let (mut best_text, mut best_score) = self.evaluate(cipher_text, reference, best_key);
        candidates.push(CandidateScore {
            key: best_key,
            score: best_score,
        });

        for shift in 1..ALPHABET_LEN as i64 {
            let key = Key::new(shift);
            let (decrypted, score) = self.evaluate(cipher_text, reference, key);
            candidates.push(CandidateScore { key, score });

            if score < best_score {
                best_key = key;
                best_text = decrypted;
                best_score = score;
            }
        }

        tracing::debug!(
            key = best_key.shift(),
            score = best_score,
            "selected most likely key"
        );

        SearchOutcome {
            key: best_key,
            plaintext: best_text,
            score: best_score,
            candidates,
        }
    }
}

/// Most English-like decryption of `cipher_text`, scored by L1 distance.
pub fn crack(cipher_text: &str, reference: &FrequencyVector) -> String {
    Cracker::default().crack(cipher_text, reference)
}
