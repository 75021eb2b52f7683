//! Letter grades and pass/fail verdicts
//!
//! Two fixed threshold tables are available. Bands are checked from the
//! highest threshold down and the first match wins, so an average sitting
//! exactly on a threshold lands in the higher band.
//!
//! | Fine (default) | Coarse |
//! |----------------|--------|
//! | >= 90 A+       | >= 90 A |
//! | >= 85 A        | >= 80 B |
//! | >= 80 A-       | >= 70 C |
//! | >= 75 B+       | >= 60 D |
//! | >= 70 B        | >= 50 E |
//! | >= 65 B-       | < 50 F  |
//! | >= 60 C+       |         |
//! | >= 50 C-       |         |
//! | < 50 F         |         |

use crate::types::Verdict;
use serde::{Deserialize, Serialize};

/// Minimum average required to pass, shared by every grade scale
pub const PASS_MARK: f64 = 50.0;

/// A single grade band: averages at or above `min_average` earn `letter`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub min_average: f64,
    pub letter: &'static str,
}

const fn band(min_average: f64, letter: &'static str) -> GradeBand {
    GradeBand {
        min_average,
        letter,
    }
}

const FINE_BANDS: &[GradeBand] = &[
    band(90.0, "A+"),
    band(85.0, "A"),
    band(80.0, "A-"),
    band(75.0, "B+"),
    band(70.0, "B"),
    band(65.0, "B-"),
    band(60.0, "C+"),
    band(50.0, "C-"),
];

const COARSE_BANDS: &[GradeBand] = &[
    band(90.0, "A"),
    band(80.0, "B"),
    band(70.0, "C"),
    band(60.0, "D"),
    band(50.0, "E"),
];

/// Letter for averages below every band
const FAILING_LETTER: &str = "F";

/// Which fixed threshold table to grade with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeScale {
    /// A+ through C-, then F
    #[default]
    Fine,
    /// A through E, then F
    Coarse,
}

impl GradeScale {
    /// Bands ordered from the highest threshold to the lowest
    pub fn bands(self) -> &'static [GradeBand] {
        match self {
            GradeScale::Fine => FINE_BANDS,
            GradeScale::Coarse => COARSE_BANDS,
        }
    }
}

impl std::fmt::Display for GradeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeScale::Fine => write!(f, "fine"),
            GradeScale::Coarse => write!(f, "coarse"),
        }
    }
}

impl std::str::FromStr for GradeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fine" => Ok(GradeScale::Fine),
            "coarse" => Ok(GradeScale::Coarse),
            other => Err(format!(
                "unknown grade scale '{}', expected 'fine' or 'coarse'",
                other
            )),
        }
    }
}

/// Maps averages to letters and verdicts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradingPolicy {
    scale: GradeScale,
}

impl GradingPolicy {
    pub fn new(scale: GradeScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> GradeScale {
        self.scale
    }

    /// Letter grade for an average
    pub fn letter_grade(&self, average: f64) -> &'static str {
        self.scale
            .bands()
            .iter()
            .find(|band| average >= band.min_average)
            .map(|band| band.letter)
            .unwrap_or(FAILING_LETTER)
    }

    /// Pass/fail verdict for an average
    pub fn verdict(&self, average: f64) -> Verdict {
        verdict(average)
    }
}

/// Pass/fail verdict, independent of any grade scale
pub fn verdict(average: f64) -> Verdict {
    if average >= PASS_MARK {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
