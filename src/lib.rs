//! Wordle Combinations Finder
//!
//! Filters a dictionary down to the words consistent with the feedback from
//! previous guesses, and suggests next guesses by positional letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_combos::core::{Feedback, GuessRecord, Word};
//! use wordle_combos::filter::Assistant;
//! use wordle_combos::suggest::SuggestConfig;
//!
//! let dictionary = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("crate").unwrap(),
//!     Word::new("trace").unwrap(),
//! ];
//! let assistant = Assistant::new(&dictionary, SuggestConfig::default());
//!
//! // Guessed CRANE; first three letters correct, no N, E correct
//! let record = GuessRecord::new(
//!     Word::new("crane").unwrap(),
//!     Feedback::parse("GGGRG").unwrap(),
//! );
//!
//! let remaining = assistant.candidates(&[record]);
//! assert_eq!(remaining.len(), 1);
//! assert_eq!(remaining[0].text(), "crate");
//! ```

// Core domain types
pub mod core;

// Constraint filtering
pub mod filter;

// Next-guess suggestion scoring
pub mod suggest;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
