//! Descending-average ranking of a roster snapshot
//!
//! Ranking works on precomputed averages and returns a permutation of record
//! indices, so the stored records never move.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How students with equal averages are ordered relative to each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Equal averages keep their insertion order
    #[default]
    Insertion,
    /// Selection sort by maximum: each pass swaps the first strict maximum of
    /// the unsorted tail into place, which can reorder earlier ties
    Selection,
}

impl TieBreak {
    /// Order record indices by descending average
    pub fn rank(self, averages: &[f64]) -> Vec<usize> {
        match self {
            TieBreak::Insertion => stable_descending(averages),
            TieBreak::Selection => selection_by_maximum(averages),
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::Insertion => write!(f, "insertion"),
            TieBreak::Selection => write!(f, "selection"),
        }
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Ok(TieBreak::Insertion),
            "selection" => Ok(TieBreak::Selection),
            other => Err(format!(
                "unknown tie-break '{}', expected 'insertion' or 'selection'",
                other
            )),
        }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn stable_descending(averages: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..averages.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| descending(averages[a], averages[b]));
    order
}

fn selection_by_maximum(averages: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..averages.len()).collect();

    for i in 0..order.len().saturating_sub(1) {
        let mut best = i;
        for j in (i + 1)..order.len() {
            if averages[order[j]] > averages[order[best]] {
                best = j;
            }
        }
        order.swap(i, best);
    }

    order
}

/// Rank with the default (insertion-stable) tie-break
pub fn rank_by_average(averages: &[f64]) -> Vec<usize> {
    TieBreak::default().rank(averages)
}
