//! Constraint filtering
//!
//! The consistency predicate and the dictionary-filtering engine built on it.

mod consistency;
mod engine;

pub use consistency::{is_consistent, is_consistent_with_all};
pub use engine::Assistant;
