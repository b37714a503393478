//! Command implementations

pub mod assist;
pub mod export;
pub mod format;

pub use assist::{AssistOptions, run_assist};
pub use export::{DEFAULT_EXPORT_PATH, export_to_file, write_report};
pub use format::{FormatConfig, run_format};
