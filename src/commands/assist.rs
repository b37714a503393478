//! Interactive assist mode
//!
//! Prompts for guesses and feedback, keeps the session history, and shows
//! the shrinking candidate set with suggestions after every round. All game
//! logic lives in the filter and suggest modules; this is the command shell
//! around them.

use crate::commands::export::{DEFAULT_EXPORT_PATH, export_to_file};
use crate::core::{Feedback, GuessRecord, Word};
use crate::filter::Assistant;
use crate::output::{
    DisplayConfig, format_feedback_row, legend, print_candidates, print_known_pattern,
    print_statistics, print_suggestions,
};
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{self, Write};

/// Candidate rows shown while the session is running
const SESSION_DISPLAY_CAP: usize = 20;
/// Candidate rows shown in the final summary
const SUMMARY_DISPLAY_CAP: usize = 50;
/// Above this many candidates, statistics and suggestions are shown
const SUGGESTION_CUTOFF: usize = 5;

/// Options for the interactive session
pub struct AssistOptions {
    /// Maximum number of suggestions per round
    pub suggestions: usize,
    pub display: DisplayConfig,
}

/// Run the interactive assist session
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn run_assist(assistant: &Assistant<'_>, options: &AssistOptions) -> Result<(), String> {
    let config = &options.display;
    let dictionary_words: FxHashSet<&str> =
        assistant.dictionary().iter().map(Word::text).collect();

    println!("{}", "=".repeat(70));
    println!("{}", "Wordle Combinations Finder".bold());
    println!("{}", "=".repeat(70));
    println!(
        "\n{} words loaded\n",
        assistant.dictionary().len()
    );

    println!("{}\n", legend(config));

    println!("{}", "Instructions:".bold());
    println!("  - Enter your guess (5-letter word)");
    println!("  - Enter feedback: G (correct position), Y (wrong position), R (not in word)");
    println!("  - Type 'done' when finished entering guesses");
    println!("  - Type 'undo' to remove the last guess");
    println!("  - Type 'export' to save results to a file");
    println!("  - Type 'legend' to see the color guide again");
    println!("  - Type 'quit' to exit\n");

    let example_guess = Word::new("crane").map_err(|e| e.to_string())?;
    let example_feedback = Feedback::parse("GYRRR").map_err(|e| e.to_string())?;
    println!("{}", config.info("Example:"));
    println!("  Guess: crane");
    println!("  Feedback: GYRRR");
    println!(
        "  Display: {}\n",
        format_feedback_row(&example_guess, example_feedback, config)
    );

    let mut history: Vec<GuessRecord> = Vec::new();

    loop {
        let Some(input) =
            get_user_input("Enter guess (or 'done'/'quit'/'undo'/'export'/'legend')")?
        else {
            println!("\n{}", config.warning("Exiting..."));
            return Ok(());
        };
        let input = input.to_lowercase();

        match input.as_str() {
            "quit" | "exit" | "q" => {
                println!("{}", config.info("Goodbye!"));
                return Ok(());
            }
            "done" => break,
            "legend" => {
                println!("\n{}\n", legend(config));
                continue;
            }
            "undo" => {
                if let Some(removed) = history.pop() {
                    println!(
                        "{}\n",
                        config.success(&format!("✓ Removed guess: {}", removed.guess()))
                    );
                    if history.is_empty() {
                        println!("{}\n", config.info("No guesses remaining. Starting fresh!"));
                    } else {
                        show_round(assistant, &history, options);
                    }
                } else {
                    println!("{}\n", config.warning("No guesses to undo"));
                }
                continue;
            }
            "export" => {
                if history.is_empty() {
                    println!("{}\n", config.warning("No guesses to export"));
                } else {
                    let candidates = assistant.candidates(&history);
                    export_session(&history, &candidates, config);
                }
                continue;
            }
            _ => {}
        }

        // Anything else is a guess attempt; validation failures leave the
        // history untouched
        let guess = match Word::new(input.as_str()) {
            Ok(word) => word,
            Err(e) => {
                println!("{}\n", config.error(&format!("✗ Error: {e}")));
                continue;
            }
        };

        if !dictionary_words.contains(guess.text()) {
            let prompt = format!("⚠ '{guess}' not in dictionary. Continue anyway? (y/n)");
            println!("{}", config.warning(&prompt));
            match get_user_input("")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {}
                Some(_) => continue,
                None => {
                    println!("\n{}", config.warning("Exiting..."));
                    return Ok(());
                }
            }
        }

        let Some(feedback_input) = get_user_input("Enter feedback (G/Y/R)")? else {
            println!("\n{}", config.warning("Exiting..."));
            return Ok(());
        };

        let feedback = match Feedback::parse(feedback_input.trim()) {
            Ok(feedback) => feedback,
            Err(e) => {
                println!("{}\n", config.error(&format!("✗ Error: {e}")));
                continue;
            }
        };

        println!(
            "  Visual: {}",
            format_feedback_row(&guess, feedback, config)
        );

        history.push(GuessRecord::new(guess, feedback));
        show_round(assistant, &history, options);
    }

    if history.is_empty() {
        println!(
            "\n{}",
            config.info(&format!(
                "📊 No guesses provided. Total words in dictionary: {}",
                assistant.dictionary().len()
            ))
        );
        return Ok(());
    }

    print_summary(assistant, &history, options);

    let candidates = assistant.candidates(&history);
    if candidates.len() > 1
        && let Some(answer) = get_user_input("Export results to file? (y/n)")?
        && answer.eq_ignore_ascii_case("y")
    {
        export_session(&history, &candidates, config);
    }

    Ok(())
}

/// Show the state after a round: pattern, candidates, stats, suggestions
fn show_round(assistant: &Assistant<'_>, history: &[GuessRecord], options: &AssistOptions) {
    let config = &options.display;
    let candidates = assistant.candidates(history);

    print_known_pattern(history, config);
    print_candidates(&candidates, SESSION_DISPLAY_CAP, config);

    if candidates.len() > SUGGESTION_CUTOFF {
        print_statistics(&candidates, config);
        let suggestions = assistant.suggest(history, options.suggestions);
        print_suggestions(&suggestions, config);
    }

    println!();
}

/// Print the end-of-session summary
fn print_summary(assistant: &Assistant<'_>, history: &[GuessRecord], options: &AssistOptions) {
    let config = &options.display;
    let candidates = assistant.candidates(history);

    println!("\n{}", "=".repeat(70));
    println!("{}", "FINAL RESULTS".bold());
    println!("{}", "=".repeat(70));

    println!("\n{}", "Your guesses:".bold());
    for (i, record) in history.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            format_feedback_row(record.guess(), record.feedback(), config)
        );
    }

    print_known_pattern(history, config);
    print_candidates(&candidates, SUMMARY_DISPLAY_CAP, config);

    if candidates.len() > 1 {
        print_statistics(&candidates, config);
    }

    println!("\n{}", "=".repeat(70));
}

/// Export and report the outcome without aborting the session
fn export_session(history: &[GuessRecord], candidates: &[&Word], config: &DisplayConfig) {
    match export_to_file(DEFAULT_EXPORT_PATH, history, candidates) {
        Ok(()) => {
            let message = format!("✓ Results exported to {DEFAULT_EXPORT_PATH}");
            println!("{}\n", config.success(&message));
        }
        Err(e) => {
            println!(
                "{}\n",
                config.error(&format!("✗ Error exporting results: {e}"))
            );
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    if prompt.is_empty() {
        print!("> ");
    } else {
        print!("{prompt}: ");
    }
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
