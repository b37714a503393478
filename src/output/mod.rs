//! Terminal output formatting
//!
//! Display configuration and pretty-printing for session state.

pub mod config;
pub mod display;
pub mod formatters;

pub use config::{DisplayConfig, Palette};
pub use display::{
    KnownPattern, print_candidates, print_known_pattern, print_statistics, print_suggestions,
};
pub use formatters::{format_feedback_row, legend};
