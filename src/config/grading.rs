//! Grading and ranking configuration

use crate::grading::GradeScale;
use crate::ranking::TieBreak;
use serde::{Deserialize, Serialize};

/// Which fixed grade table to use and how ranking ties are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub scale: GradeScale,
    pub tie_break: TieBreak,
}
