//! Plain-text result export
//!
//! Dumps the session so far - guesses with their feedback and the remaining
//! candidates - as a human-readable text file.

use crate::core::{GuessRecord, Word};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default export file name
pub const DEFAULT_EXPORT_PATH: &str = "wordle_results.txt";

/// Write the session report to any writer
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_report<W: Write>(
    out: &mut W,
    history: &[GuessRecord],
    candidates: &[&Word],
) -> io::Result<()> {
    writeln!(out, "Wordle Solver Results")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    writeln!(out, "Guesses:")?;
    for record in history {
        writeln!(
            out,
            "  {} -> {}",
            record.guess().text().to_uppercase(),
            record.feedback()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Possible words ({}):", candidates.len())?;

    let mut sorted: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    sorted.sort_unstable();
    for word in sorted {
        writeln!(out, "  {}", word.to_uppercase())?;
    }

    Ok(())
}

/// Write the session report to a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn export_to_file<P: AsRef<Path>>(
    path: P,
    history: &[GuessRecord],
    candidates: &[&Word],
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_report(&mut out, history, candidates)?;
    out.flush()
}
