//! Error types for the gradebook core
//!
//! Every roster, statistics and reporting operation returns one of these
//! variants instead of panicking. The console layer and `main` wrap them in
//! `anyhow` when they need extra context.

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Named failure conditions surfaced by the roster and reporting engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradebookError {
    #[error("Roster is full (capacity {capacity})")]
    RosterFull { capacity: usize },

    #[error("Student ID already exists: {id}")]
    DuplicateId { id: String },

    #[error("Invalid student ID '{id}': {reason}")]
    InvalidIdFormat { id: String, reason: String },

    #[error("Invalid student name: {reason}")]
    InvalidName { reason: String },

    #[error("Score {value} is outside the range [0, 100]")]
    InvalidScore { value: f64 },

    #[error("Expected {expected} score(s), got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("Assessment index {index} is outside [0, {test_count})")]
    InvalidIndex { index: usize, test_count: usize },

    #[error("Student not found: {id}")]
    NotFound { id: String },

    #[error("No students in the roster yet")]
    EmptyRoster,

    #[error("Cannot compute extrema of an empty score sequence")]
    EmptySequence,

    #[error("Configuration error: {message}")]
    InvalidConfiguration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GradebookError {
    /// Whether the error stems from caller input rather than internal state
    pub fn is_user_error(&self) -> bool {
        !matches!(self, GradebookError::Internal { .. })
    }
}
