//! Word list formatting command
//!
//! Command shell around the formatter: read a words file, render the
//! bracketed list, write it out, and print a short summary.

use crate::wordlists::formatter::{FormatOptions, format_word_list, read_word_lines};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Configuration for the format command
pub struct FormatConfig {
    /// Input file with one word per line
    pub input: PathBuf,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    pub options: FormatOptions,
}

/// Run the word list formatter
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run_format(config: &FormatConfig) -> Result<(), String> {
    let words = read_word_lines(&config.input)
        .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;

    let formatted = format_word_list(&words, config.options);

    match &config.output {
        Some(path) => {
            fs::write(path, &formatted)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

            println!("{}", format!("✓ Formatted {} unique words", words.len()).blue());
            println!("{}", format!("✓ Output saved to: {}", path.display()).blue());

            let mut preview: Vec<&String> = words.iter().collect();
            if config.options.alphabetize {
                preview.sort();
            }
            if !preview.is_empty() {
                println!("\nFirst few words: {}", join_preview(&preview[..preview.len().min(5)]));
                let tail_start = preview.len().saturating_sub(5);
                println!("Last few words: {}", join_preview(&preview[tail_start..]));
            }
        }
        None => print!("{formatted}"),
    }

    Ok(())
}

fn join_preview(words: &[&String]) -> String {
    words
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
