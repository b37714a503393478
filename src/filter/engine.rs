//! Candidate filtering engine
//!
//! Holds a borrowed dictionary and recomputes the candidate set from the full
//! guess history on every query. Recomputation keeps append and undo trivially
//! correct at this scale; nothing is cached between calls.

use super::consistency::is_consistent_with_all;
use crate::core::{GuessRecord, Word};
use crate::suggest::{SuggestConfig, suggest_next};

/// Constraint-filtering assistant over a fixed dictionary
pub struct Assistant<'a> {
    dictionary: &'a [Word],
    suggest_config: SuggestConfig,
}

impl<'a> Assistant<'a> {
    /// Create an assistant over the given dictionary
    ///
    /// The dictionary is expected to be deduplicated in load order; the
    /// candidate set preserves that order.
    #[must_use]
    pub const fn new(dictionary: &'a [Word], suggest_config: SuggestConfig) -> Self {
        Self {
            dictionary,
            suggest_config,
        }
    }

    /// The full dictionary this assistant filters
    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Words still consistent with every record in `history`
    ///
    /// Returns the matching subsequence of the dictionary, order preserved.
    /// An empty result means the feedback entered so far excludes every
    /// dictionary word; an empty history excludes nothing.
    #[must_use]
    pub fn candidates(&self, history: &[GuessRecord]) -> Vec<&'a Word> {
        self.dictionary
            .iter()
            .filter(|word| is_consistent_with_all(word, history))
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessRecord]) -> usize {
        self.candidates(history).len()
    }

    /// Rank next-guess suggestions for the current history
    ///
    /// Filters first, then scores; see [`suggest_next`] for the policy.
    #[must_use]
    pub fn suggest(&self, history: &[GuessRecord], limit: usize) -> Vec<&'a Word> {
        let candidates = self.candidates(history);
        suggest_next(&candidates, self.dictionary, limit, &self.suggest_config)
    }
}
