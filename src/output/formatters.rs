//! Formatting utilities for terminal output

use super::config::DisplayConfig;
use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Format a guess with its feedback as one colored row
///
/// Each letter is uppercased, prefixed with its mark symbol when symbols are
/// enabled, and styled with the mark's palette color.
#[must_use]
pub fn format_feedback_row(guess: &Word, feedback: Feedback, config: &DisplayConfig) -> String {
    let cells: Vec<String> = guess
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let mark = feedback.mark(i);
            let cell = format!(
                "{}{}",
                config.symbol(mark),
                (letter as char).to_ascii_uppercase()
            );
            config.mark_style(mark, &cell).to_string()
        })
        .collect();

    cells.join(" ")
}

/// Render the color/symbol legend
#[must_use]
pub fn legend(config: &DisplayConfig) -> String {
    let mut lines = vec!["Legend:".bold().to_string()];
    for (mark, meaning) in [
        (Mark::Correct, "Blue/Solid = Correct position"),
        (Mark::Present, "Magenta/Circle = Wrong position"),
        (Mark::Absent, "Gray/Dot = Not in word"),
    ] {
        let sample = format!("{}■", config.symbol(mark));
        lines.push(format!(
            "  {} {meaning}",
            config.mark_style(mark, &sample)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> DisplayConfig {
        colored::control::set_override(false);
        DisplayConfig::default()
    }

    #[test]
    fn feedback_row_shows_symbols_and_uppercase_letters() {
        let config = plain_config();
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::parse("GYRRR").unwrap();

        let row = format_feedback_row(&guess, feedback, &config);
        assert_eq!(row, "█C ○R ·A ·N ·E");
    }

    #[test]
    fn feedback_row_without_symbols() {
        colored::control::set_override(false);
        let config = DisplayConfig {
            symbols: false,
            ..DisplayConfig::default()
        };
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::parse("GGGGG").unwrap();

        let row = format_feedback_row(&guess, feedback, &config);
        assert_eq!(row, "C R A N E");
    }

    #[test]
    fn legend_names_all_three_marks() {
        let config = plain_config();
        let text = legend(&config);

        assert!(text.contains("Correct position"));
        assert!(text.contains("Wrong position"));
        assert!(text.contains("Not in word"));
    }
}
