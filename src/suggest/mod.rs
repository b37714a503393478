//! Next-guess suggestion scoring
//!
//! Ranks a search pool by positional letter frequency over the remaining
//! candidates. A word scores the sum, over its positions, of how many
//! candidates share that letter there, damped by its fraction of distinct
//! letters - repeated letters probe less of the answer space.

use crate::core::{WORD_LENGTH, Word};
use std::cmp::Ordering;

/// Tuning knobs for suggestion scoring
///
/// The pool cap bounds work when many candidates remain by scoring only a
/// prefix of the dictionary. Suggestions are then sensitive to dictionary
/// order and not globally optimal; raising the cap trades time for quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Candidate sets at or below this size are returned as-is
    pub small_threshold: usize,
    /// Above this many candidates, score the dictionary prefix instead
    pub widen_threshold: usize,
    /// Maximum dictionary prefix length used as the search pool
    pub pool_cap: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            small_threshold: 2,
            widen_threshold: 20,
            pool_cap: 2000,
        }
    }
}

/// Rank next guesses for the current candidate set
///
/// Returns at most `limit` words, highest score first, ties broken by
/// ascending word order so results are reproducible. Small candidate sets
/// come back unchanged; an empty candidate set or a zero limit yields an
/// empty list.
#[must_use]
pub fn suggest_next<'a>(
    candidates: &[&'a Word],
    dictionary: &'a [Word],
    limit: usize,
    config: &SuggestConfig,
) -> Vec<&'a Word> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    if candidates.len() <= config.small_threshold {
        return candidates.iter().take(limit).copied().collect();
    }

    // With many candidates left, a good probe word need not be a candidate
    // itself - widen the pool to (a capped prefix of) the dictionary
    let pool: Vec<&'a Word> = if candidates.len() > config.widen_threshold {
        dictionary.iter().take(config.pool_cap).collect()
    } else {
        candidates.to_vec()
    };

    let frequencies = position_frequencies(candidates);

    let mut scored: Vec<(f64, &'a Word)> = pool
        .into_iter()
        .map(|word| (score_word(word, &frequencies), word))
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.text().cmp(b.1.text()))
    });

    scored.into_iter().take(limit).map(|(_, word)| word).collect()
}

/// Count, per position, how many candidates carry each letter there
fn position_frequencies(candidates: &[&Word]) -> [[u32; 26]; WORD_LENGTH] {
    let mut frequencies = [[0u32; 26]; WORD_LENGTH];

    for word in candidates {
        for (i, &letter) in word.chars().iter().enumerate() {
            frequencies[i][(letter - b'a') as usize] += 1;
        }
    }

    frequencies
}

/// Positional frequency sum, damped by the distinct-letter fraction
fn score_word(word: &Word, frequencies: &[[u32; 26]; WORD_LENGTH]) -> f64 {
    let position_score: u32 = word
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &letter)| frequencies[i][(letter - b'a') as usize])
        .sum();

    f64::from(position_score) * (word.distinct_letters() as f64 / WORD_LENGTH as f64)
}
