//! Word list loading utilities
//!
//! Turns raw word sources (the embedded list or a user-supplied file) into a
//! clean dictionary: lowercase, valid 5-letter entries only, duplicates
//! removed keeping the first occurrence.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and entries that fail word validation are skipped; duplicates
/// keep their first occurrence so the file's order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_combos::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(dedup_words(content.lines()))
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_combos::wordlists::loader::words_from_slice;
/// use wordle_combos::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert!(words.len() <= WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_words(slice.iter().copied())
}

/// Validate and dedup raw entries, preserving first-occurrence order
fn dedup_words<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();

    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Ok(word) = Word::new(trimmed) else {
            continue;
        };
        if seen.insert(word.text().to_string()) {
            words.push(word);
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_dedups_preserving_first_occurrence() {
        let input = &["slate", "crane", "SLATE", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "slate");
        assert_eq!(words[1].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn embedded_list_loads() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        // A few raw entries are not valid 5-letter words and are skipped
        assert!(words.len() <= WORDS.len());
        assert!(words.len() > 500);
    }
}
