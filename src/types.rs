//! Common types used throughout the gradebook

use serde::{Deserialize, Serialize};

/// Case-normalized student identifier
pub type StudentId = String;

/// Lowest score an assessment can hold
pub const MIN_SCORE: f64 = 0.0;

/// Highest score an assessment can hold
pub const MAX_SCORE: f64 = 100.0;

/// One student's identity and assessment results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    /// Exactly `test_count` entries, each within [0, 100]
    pub scores: Vec<f64>,
}

impl StudentRecord {
    pub fn new(id: StudentId, name: String, scores: Vec<f64>) -> Self {
        Self { id, name, scores }
    }

    /// Arithmetic mean of this student's scores
    pub fn average(&self) -> f64 {
        crate::stats::average(&self.scores)
    }
}

/// Pass/fail classification of an average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
        }
    }
}

/// Check that a single score lies within [0, 100]
pub fn is_valid_score(value: f64) -> bool {
    value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value)
}
