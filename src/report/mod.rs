//! Reporting façade
//!
//! Builds the single-student report, the roster listing and the class
//! summary with ranking from the roster, statistics and grading modules.

pub mod gradebook;
pub mod views;

// Re-export commonly used types
pub use gradebook::Gradebook;
pub use views::{ClassSummary, RankedStudent, RosterRow, StudentReport};
