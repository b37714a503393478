//! Feedback-consistency predicate
//!
//! Decides whether a candidate word could still be the hidden answer given
//! one guess and the feedback the game produced for it. Duplicate letters are
//! the subtle part: marks of the same letter combine into a minimum count
//! (from `Correct`/`Present`) and, when an `Absent` mark exists, an exact
//! upper bound.

use crate::core::{Feedback, GuessRecord, Mark, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Check whether `word` is consistent with one (guess, feedback) pair
///
/// Constraints, all of which must hold:
/// - `Correct` at position i requires `word[i] == guess[i]`
/// - `Present` at position i requires `word[i] != guess[i]` (the game would
///   have marked it `Correct` otherwise)
/// - Each guess letter must occur in `word` at least as many times as it was
///   marked `Correct` or `Present`
/// - A guess letter with any `Absent` mark must occur no more times than its
///   `Correct`/`Present` marks allow; with no such marks it must not occur
///   at all
///
/// # Examples
/// ```
/// use wordle_combos::core::{Feedback, Word};
/// use wordle_combos::filter::is_consistent;
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = Feedback::parse("GYRRR").unwrap();
///
/// assert!(is_consistent(&Word::new("chirp").unwrap(), &guess, feedback));
/// assert!(!is_consistent(&Word::new("brick").unwrap(), &guess, feedback));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, feedback: Feedback) -> bool {
    // Positional constraints
    for i in 0..WORD_LENGTH {
        match feedback.mark(i) {
            Mark::Correct => {
                if word.char_at(i) != guess.char_at(i) {
                    return false;
                }
            }
            Mark::Present => {
                if word.char_at(i) == guess.char_at(i) {
                    return false;
                }
            }
            Mark::Absent => {}
        }
    }

    // Per-letter occurrence bounds
    let mut min_counts: FxHashMap<u8, u8> = FxHashMap::default();
    let mut absent_letters: FxHashSet<u8> = FxHashSet::default();

    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        match feedback.mark(i) {
            Mark::Correct | Mark::Present => {
                *min_counts.entry(letter).or_insert(0) += 1;
            }
            Mark::Absent => {
                absent_letters.insert(letter);
            }
        }
    }

    let word_counts = word.char_counts();

    for (&letter, &min_count) in &min_counts {
        if word_counts.get(&letter).copied().unwrap_or(0) < min_count {
            return false;
        }
    }

    // An Absent mark caps the letter at its confirmed count (zero if none)
    for &letter in &absent_letters {
        let max_allowed = min_counts.get(&letter).copied().unwrap_or(0);
        if word_counts.get(&letter).copied().unwrap_or(0) > max_allowed {
            return false;
        }
    }

    true
}

/// Check whether `word` is consistent with every record in `history`
///
/// Constraints are conjunctive, so record order cannot change the outcome;
/// records are applied in insertion order and the first failure short-circuits.
#[must_use]
pub fn is_consistent_with_all(word: &Word, history: &[GuessRecord]) -> bool {
    history
        .iter()
        .all(|record| is_consistent(word, record.guess(), record.feedback()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn feedback(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn all_correct_matches_only_the_guess_itself() {
        let guess = word("crane");
        let fb = feedback("GGGGG");

        assert!(is_consistent(&word("crane"), &guess, fb));
        for other in ["crate", "slate", "brand", "craze"] {
            assert!(!is_consistent(&word(other), &guess, fb));
        }
    }

    #[test]
    fn correct_pins_the_position() {
        let guess = word("crane");
        let fb = feedback("GRRRR");

        assert!(is_consistent(&word("could"), &guess, fb));
        assert!(!is_consistent(&word("bound"), &guess, fb)); // No leading c
    }

    #[test]
    fn present_excludes_the_guessed_position() {
        let guess = word("crane");
        let fb = feedback("RYRRR");

        // R must appear, but not at position 1
        assert!(is_consistent(&word("short"), &guess, fb));
        assert!(!is_consistent(&word("brown"), &guess, fb)); // R at position 1
        assert!(!is_consistent(&word("skill"), &guess, fb)); // No R at all
    }

    #[test]
    fn absent_only_letter_must_not_appear() {
        let guess = word("crane");
        let fb = feedback("RRRRR");

        assert!(is_consistent(&word("hoist"), &guess, fb));
        assert!(!is_consistent(&word("could"), &guess, fb)); // Has c
        assert!(!is_consistent(&word("sworn"), &guess, fb)); // Has r and n
    }

    #[test]
    fn mixed_marks_bound_duplicate_letter_exactly() {
        // Guess LLAMA with the second L marked Absent: the answer has exactly
        // one L (at position 0), exactly one A (not at position 2), and no M
        let guess = word("llama");
        let fb = Feedback::new([
            Mark::Correct,
            Mark::Absent,
            Mark::Present,
            Mark::Absent,
            Mark::Absent,
        ]);

        assert!(is_consistent(&word("labor"), &guess, fb));
        assert!(!is_consistent(&word("loyal"), &guess, fb)); // Two L's
        assert!(!is_consistent(&word("loans"), &guess, fb)); // A at position 2
        assert!(!is_consistent(&word("lamas"), &guess, fb)); // Two A's and an M
    }

    #[test]
    fn absent_caps_at_confirmed_count() {
        // Guess SPEED with one E Present and one E Absent: the answer has
        // exactly one E, somewhere other than position 2
        let guess = word("speed");
        let fb = Feedback::new([
            Mark::Absent,
            Mark::Absent,
            Mark::Present,
            Mark::Absent,
            Mark::Absent,
        ]);

        assert!(is_consistent(&word("enact"), &guess, fb));
        assert!(!is_consistent(&word("theme"), &guess, fb)); // Two E's
        assert!(!is_consistent(&word("ocean"), &guess, fb)); // E at position 2
    }

    #[test]
    fn agrees_with_game_rule_on_fixture_dictionary() {
        // For every (guess, answer) pair, feedback simulated by the game rule
        // must accept the true answer
        let fixture = [
            "llama", "alarm", "crane", "crate", "trace", "react", "cater", "speed", "erase",
            "level", "eagle", "added", "radar",
        ];

        for guess_text in fixture {
            let guess = word(guess_text);
            for answer_text in fixture {
                let answer = word(answer_text);
                let fb = Feedback::from_answer(&guess, &answer);
                assert!(
                    is_consistent(&answer, &guess, fb),
                    "{answer_text} rejected for guess {guess_text} with {fb}"
                );
            }
        }
    }

    #[test]
    fn excludes_words_the_game_rule_distinguishes() {
        // Simulated feedback for one answer must reject every fixture word
        // that would have produced different feedback
        let fixture = ["llama", "alarm", "crane", "crate", "trace", "react", "cater"];

        for guess_text in fixture {
            let guess = word(guess_text);
            for answer_text in fixture {
                let answer = word(answer_text);
                let fb = Feedback::from_answer(&guess, &answer);
                for other_text in fixture {
                    let other = word(other_text);
                    if Feedback::from_answer(&guess, &other) != fb {
                        assert!(
                            !is_consistent(&other, &guess, fb),
                            "{other_text} accepted for guess {guess_text} with {fb}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn history_is_conjunctive() {
        let history = vec![
            GuessRecord::new(word("crane"), feedback("GRRRR")),
            GuessRecord::new(word("bumpy"), feedback("RYRRR")),
        ];

        // Satisfies both records
        assert!(is_consistent_with_all(&word("could"), &history));
        // Satisfies the second record but not the first (contains an R)
        assert!(is_consistent_with_all(&word("court"), &history[1..]));
        assert!(!is_consistent_with_all(&word("court"), &history));
        // Empty history excludes nothing
        assert!(is_consistent_with_all(&word("zesty"), &[]));
    }
}
