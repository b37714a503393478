//! A guess paired with its feedback
//!
//! Records are created at the input boundary after both halves validate, then
//! appended to the session history. Undo removes the most recent record.

use super::feedback::Feedback;
use super::word::Word;

/// One round of the game: what was guessed and what the game answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Pair a validated guess with its validated feedback
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback row for the guess
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}
