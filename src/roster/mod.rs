//! Roster storage for student records
//!
//! This module holds the bounded student collection and the input rules the
//! store enforces before any write.

pub mod store;
pub mod validation;

// Re-export commonly used types
pub use store::{InMemoryRoster, RosterStore};
pub use validation::{normalize_id, normalize_name, validate_score, validate_scores};
