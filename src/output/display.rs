//! Display functions for session state
//!
//! Everything here consumes core outputs (candidate sets, histories,
//! suggestion lists) and renders them for the terminal; nothing feeds back
//! into filtering.

use super::config::DisplayConfig;
use crate::core::{GuessRecord, Mark, WORD_LENGTH, Word};
use colored::Colorize;

/// What the history so far pins down about the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownPattern {
    /// Confirmed letter per position, from `Correct` marks
    pub known: [Option<char>; WORD_LENGTH],
    /// Letters with a `Present` mark: in the word, position unknown
    pub must_contain: Vec<char>,
    /// Letters ruled out entirely (`Absent` with no other mark in the guess)
    pub cannot_contain: Vec<char>,
}

impl KnownPattern {
    /// Collapse a guess history into the pattern it reveals
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut known = [None; WORD_LENGTH];
        let mut must_contain = Vec::new();
        let mut cannot_contain = Vec::new();

        for record in history {
            let guess = record.guess();
            let feedback = record.feedback();

            for i in 0..WORD_LENGTH {
                let letter = (guess.char_at(i) as char).to_ascii_uppercase();
                match feedback.mark(i) {
                    Mark::Correct => known[i] = Some(letter),
                    Mark::Present => must_contain.push(letter),
                    Mark::Absent => {
                        // Ruled out only when no mark elsewhere in this guess
                        // confirms the letter
                        let confirmed = (0..WORD_LENGTH).any(|j| {
                            guess.char_at(j) == guess.char_at(i)
                                && feedback.mark(j) != Mark::Absent
                        });
                        if !confirmed {
                            cannot_contain.push(letter);
                        }
                    }
                }
            }
        }

        must_contain.sort_unstable();
        must_contain.dedup();
        cannot_contain.sort_unstable();
        cannot_contain.dedup();
        // A letter later confirmed in another guess is not ruled out
        cannot_contain.retain(|c| !must_contain.contains(c) && !known.contains(&Some(*c)));

        Self {
            known,
            must_contain,
            cannot_contain,
        }
    }

    /// Render the confirmed positions as `C _ A _ E`
    #[must_use]
    pub fn placeholder_row(&self) -> String {
        self.known
            .iter()
            .map(|slot| slot.map_or("_".to_string(), |c| c.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Print what the history has revealed about the answer
pub fn print_known_pattern(history: &[GuessRecord], config: &DisplayConfig) {
    let pattern = KnownPattern::from_history(history);

    println!(
        "\n{} {}",
        "Known pattern:".bold(),
        pattern.placeholder_row()
    );

    if !pattern.must_contain.is_empty() {
        let letters = join_letters(&pattern.must_contain);
        println!(
            "{} {letters}",
            config.mark_style(Mark::Present, "Must contain:")
        );
    }

    if !pattern.cannot_contain.is_empty() {
        let letters = join_letters(&pattern.cannot_contain);
        println!(
            "{} {letters}",
            config.mark_style(Mark::Absent, "Cannot contain:")
        );
    }
}

/// Print the remaining candidates
///
/// Zero candidates is reported as a feedback-entry problem, one candidate as
/// the found answer; otherwise words print in columns, capped at
/// `max_display` with a trailing count.
pub fn print_candidates(candidates: &[&Word], max_display: usize, config: &DisplayConfig) {
    if candidates.is_empty() {
        println!("\n{}", config.error("✗ No possible words remain!").bold());
        println!(
            "{}",
            config.warning("  Check your feedback entries for errors.")
        );
        return;
    }

    if candidates.len() == 1 {
        println!(
            "\n{} {}",
            config.success("🎉 Found the answer:").bold(),
            candidates[0].text().to_uppercase().bold()
        );
        return;
    }

    println!(
        "\n{}",
        config.info(&format!("📋 Possible words ({}):", candidates.len()))
    );

    // Collaborator-side sort; the candidate set itself stays in dictionary order
    let mut sorted: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    sorted.sort_unstable();

    const COLUMNS: usize = 4;
    let shown = &sorted[..sorted.len().min(max_display)];
    for row in shown.chunks(COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|w| format!("{:6}", w.to_uppercase()))
            .collect();
        println!("  {}", cells.join(" "));
    }

    if candidates.len() > max_display {
        let more = format!("... and {} more", candidates.len() - max_display);
        println!("  {}", config.info(&more));
    }
}

/// Print the ranked suggestion list
pub fn print_suggestions(suggestions: &[&Word], config: &DisplayConfig) {
    if suggestions.is_empty() {
        return;
    }

    println!(
        "\n{}",
        config.info("💡 Suggested next guesses (best letter coverage):")
    );
    for word in suggestions {
        println!("  → {}", word.text().to_uppercase().bold());
    }
}

/// Most frequent letters across the candidates, ties broken alphabetically
#[must_use]
pub fn most_common_letters(candidates: &[&Word], top: usize) -> Vec<(char, usize)> {
    let mut counts = [0usize; 26];
    for word in candidates {
        for &letter in word.chars() {
            counts[(letter - b'a') as usize] += 1;
        }
    }
    top_counts(&counts, top)
}

/// Most frequent first letters across the candidates
#[must_use]
pub fn most_common_first_letters(candidates: &[&Word], top: usize) -> Vec<(char, usize)> {
    let mut counts = [0usize; 26];
    for word in candidates {
        counts[(word.char_at(0) - b'a') as usize] += 1;
    }
    top_counts(&counts, top)
}

/// Print quick statistics about the remaining candidates
pub fn print_statistics(candidates: &[&Word], config: &DisplayConfig) {
    if candidates.is_empty() {
        return;
    }

    let letters = join_counted(&most_common_letters(candidates, 5));
    let firsts = join_counted(&most_common_first_letters(candidates, 3));

    println!("\n{}", config.info("📊 Statistics:"));
    println!("  Most common letters: {letters}");
    println!("  Most common first letters: {firsts}");
}

fn top_counts(counts: &[usize; 26], top: usize) -> Vec<(char, usize)> {
    let mut entries: Vec<(char, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, &count)| ((b'a' + i as u8) as char, count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(top);
    entries
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_counted(entries: &[(char, usize)]) -> String {
    entries
        .iter()
        .map(|(letter, _)| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, GuessRecord};

    fn record(guess: &str, feedback: &str) -> GuessRecord {
        GuessRecord::new(
            Word::new(guess).unwrap(),
            Feedback::parse(feedback).unwrap(),
        )
    }

    #[test]
    fn known_pattern_collects_positions_and_letter_sets() {
        let history = vec![record("crane", "GYRRR"), record("ftold", "RRYRR")];
        let pattern = KnownPattern::from_history(&history);

        assert_eq!(pattern.known[0], Some('C'));
        assert_eq!(pattern.known[1], None);
        assert_eq!(pattern.must_contain, vec!['O', 'R']);
        assert_eq!(pattern.cannot_contain, vec!['A', 'D', 'E', 'F', 'L', 'N', 'T']);
        assert_eq!(pattern.placeholder_row(), "C _ _ _ _");
    }

    #[test]
    fn known_pattern_does_not_rule_out_confirmed_duplicates() {
        // Second L absent while the first is correct: L stays confirmed
        let history = vec![record("llama", "GRRRR")];
        let pattern = KnownPattern::from_history(&history);

        assert_eq!(pattern.known[0], Some('L'));
        assert!(!pattern.cannot_contain.contains(&'L'));
        assert!(pattern.cannot_contain.contains(&'A'));
        assert!(pattern.cannot_contain.contains(&'M'));
    }

    #[test]
    fn known_pattern_empty_history() {
        let pattern = KnownPattern::from_history(&[]);
        assert_eq!(pattern.placeholder_row(), "_ _ _ _ _");
        assert!(pattern.must_contain.is_empty());
        assert!(pattern.cannot_contain.is_empty());
    }

    #[test]
    fn statistics_order_is_deterministic() {
        let dictionary: Vec<Word> = ["crane", "crate", "trace"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect();
        let candidates: Vec<&Word> = dictionary.iter().collect();

        // a, c, e, r appear three times each; ties resolve alphabetically
        let letters = most_common_letters(&candidates, 5);
        assert_eq!(letters[0], ('a', 3));
        assert_eq!(letters[1], ('c', 3));
        assert_eq!(letters[2], ('e', 3));
        assert_eq!(letters[3], ('r', 3));
        assert_eq!(letters[4], ('t', 2));

        let firsts = most_common_first_letters(&candidates, 3);
        assert_eq!(firsts[0], ('c', 2));
        assert_eq!(firsts[1], ('t', 1));
    }
}
