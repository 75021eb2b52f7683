//! Per-student score statistics
//!
//! Pure functions over a student's score sequence. The roster guarantees at
//! least one assessment per student, so the extrema only fail when handed a
//! slice that did not come from a roster.

use crate::error::{GradebookError, Result};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one score sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    /// Number of scores aggregated
    pub count: usize,
    /// Sum of all scores
    pub total: f64,
    /// Lowest score
    pub min: f64,
    /// Highest score
    pub max: f64,
    /// Arithmetic mean
    pub average: f64,
}

impl ScoreStats {
    /// Compute all statistics in a single pass
    pub fn from_scores(scores: &[f64]) -> Result<Self> {
        let (first, rest) = scores.split_first().ok_or(GradebookError::EmptySequence)?;

        let mut total = *first;
        let mut min = *first;
        let mut max = *first;
        for &score in rest {
            total += score;
            min = min.min(score);
            max = max.max(score);
        }

        Ok(Self {
            count: scores.len(),
            total,
            min,
            max,
            average: total / scores.len() as f64,
        })
    }
}

/// Sum of all scores
pub fn sum(scores: &[f64]) -> f64 {
    scores.iter().sum()
}

/// Lowest score in the sequence
pub fn min(scores: &[f64]) -> Result<f64> {
    scores
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(GradebookError::EmptySequence)
}

/// Highest score in the sequence
pub fn max(scores: &[f64]) -> Result<f64> {
    scores
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(GradebookError::EmptySequence)
}

/// Arithmetic mean, `0.0` for an empty sequence
pub fn average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    sum(scores) / scores.len() as f64
}
