//! Gradebook - roster, statistics, grading and ranking for one class
//!
//! This crate keeps a bounded in-memory roster of students and their
//! assessment scores, derives per-student statistics, letter grades and
//! pass/fail verdicts, and produces a ranked class summary. A console
//! session drives it interactively.

pub mod config;
pub mod console;
pub mod error;
pub mod grading;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod stats;
pub mod types;

// Re-export commonly used types and traits
pub use error::{GradebookError, Result};
pub use types::*;

// Re-export key components
pub use grading::{GradeScale, GradingPolicy, PASS_MARK};
pub use ranking::TieBreak;
pub use report::Gradebook;
pub use roster::{InMemoryRoster, RosterStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
