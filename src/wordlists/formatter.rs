//! Word list formatter
//!
//! Reformats a plain words file (one word per line) into a bracketed,
//! quoted list suitable for pasting into a source file. Entries are
//! lowercased and deduplicated keeping the first occurrence; sorting is
//! optional.

use rustc_hash::FxHashSet;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Formatting options for [`format_word_list`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Words emitted per output line
    pub words_per_line: usize,
    /// Sort the entries alphabetically before formatting
    pub alphabetize: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            words_per_line: 10,
            alphabetize: true,
        }
    }
}

/// Read raw word lines from a file: trimmed, lowercased, deduplicated
///
/// Unlike the dictionary loader this keeps entries of any length - the
/// formatter is a general list utility, not a game component.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_word_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim().to_lowercase();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.clone()) {
            words.push(trimmed);
        }
    }

    Ok(words)
}

/// Render words as a bracketed quoted list
///
/// # Examples
/// ```
/// use wordle_combos::wordlists::formatter::{FormatOptions, format_word_list};
///
/// let words = vec!["crane".to_string(), "slate".to_string()];
/// let options = FormatOptions::default();
/// assert_eq!(format_word_list(&words, options), "[\n    \"crane\", \"slate\"\n]\n");
/// ```
#[must_use]
pub fn format_word_list(words: &[String], options: FormatOptions) -> String {
    let mut words: Vec<&String> = words.iter().collect();
    if options.alphabetize {
        words.sort();
    }

    let per_line = options.words_per_line.max(1);

    let mut output = String::from("[\n");
    for (i, chunk) in words.chunks(per_line).enumerate() {
        let line = chunk
            .iter()
            .map(|word| format!("\"{word}\""))
            .collect::<Vec<_>>()
            .join(", ");

        let last = (i + 1) * per_line >= words.len();
        let _ = writeln!(output, "    {line}{}", if last { "" } else { "," });
    }
    output.push_str("]\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn formats_single_line() {
        let words = strings(&["delta", "alpha"]);
        let output = format_word_list(&words, FormatOptions::default());

        assert_eq!(output, "[\n    \"alpha\", \"delta\"\n]\n");
    }

    #[test]
    fn splits_lines_at_the_requested_width() {
        let words = strings(&["a", "b", "c", "d", "e"]);
        let options = FormatOptions {
            words_per_line: 2,
            alphabetize: false,
        };
        let output = format_word_list(&words, options);

        assert_eq!(
            output,
            "[\n    \"a\", \"b\",\n    \"c\", \"d\",\n    \"e\"\n]\n"
        );
    }

    #[test]
    fn unsorted_preserves_input_order() {
        let words = strings(&["delta", "alpha"]);
        let options = FormatOptions {
            alphabetize: false,
            ..FormatOptions::default()
        };
        let output = format_word_list(&words, options);

        assert_eq!(output, "[\n    \"delta\", \"alpha\"\n]\n");
    }

    #[test]
    fn empty_input_formats_to_empty_brackets() {
        let output = format_word_list(&[], FormatOptions::default());
        assert_eq!(output, "[\n]\n");
    }
}
