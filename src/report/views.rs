//! Read-only views produced by the reporting façade

use crate::grading::GradeScale;
use crate::types::{StudentId, Verdict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything known about one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    pub id: StudentId,
    pub name: String,
    pub scores: Vec<f64>,
    pub total: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub grade: String,
    pub verdict: Verdict,
}

/// One line of the roster listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub id: StudentId,
    pub name: String,
    pub average: f64,
    pub grade: String,
}

/// A student's place in the class ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStudent {
    /// 1-based position, 1 = highest average
    pub rank: usize,
    pub id: StudentId,
    pub name: String,
    pub average: f64,
    pub grade: String,
    pub verdict: Verdict,
}

/// Class-wide statistics plus the full ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub student_count: usize,
    pub test_count: usize,
    /// Mean of the per-student averages
    pub class_average: f64,
    pub best_average: f64,
    pub worst_average: f64,
    pub pass_count: usize,
    /// Percentage of students at or above the pass mark
    pub pass_rate: f64,
    pub grade_scale: GradeScale,
    pub ranking: Vec<RankedStudent>,
    pub generated_at: DateTime<Utc>,
}

impl ClassSummary {
    pub fn fail_count(&self) -> usize {
        self.student_count - self.pass_count
    }
}
