//! Gradebook façade over the roster, statistics, grading and ranking
//!
//! The console layer talks only to [`Gradebook`]. It forwards mutations to
//! the store and builds every report from one consistent snapshot.

use crate::config::{GradingConfig, RosterConfig};
use crate::error::{GradebookError, Result};
use crate::grading::GradingPolicy;
use crate::ranking::TieBreak;
use crate::report::views::{ClassSummary, RankedStudent, RosterRow, StudentReport};
use crate::roster::{InMemoryRoster, RosterStore};
use crate::stats::ScoreStats;
use crate::types::StudentRecord;
use std::sync::Arc;
use tracing::{debug, warn};

/// Entry point for roster mutations and report generation
#[derive(Clone)]
pub struct Gradebook {
    store: Arc<dyn RosterStore>,
    policy: GradingPolicy,
    tie_break: TieBreak,
}

impl std::fmt::Debug for Gradebook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gradebook")
            .field("config", self.store.config())
            .field("policy", &self.policy)
            .field("tie_break", &self.tie_break)
            .finish()
    }
}

fn log_rejection<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        warn!("{} rejected: {}", operation, e);
    }
    result
}

impl Gradebook {
    pub fn new(store: Arc<dyn RosterStore>, grading: GradingConfig) -> Self {
        Self {
            store,
            policy: GradingPolicy::new(grading.scale),
            tie_break: grading.tie_break,
        }
    }

    /// Gradebook over a fresh in-memory roster
    pub fn in_memory(roster: RosterConfig, grading: GradingConfig) -> Result<Self> {
        let store = InMemoryRoster::new(roster)?;
        Ok(Self::new(Arc::new(store), grading))
    }

    pub fn store(&self) -> &Arc<dyn RosterStore> {
        &self.store
    }

    pub fn policy(&self) -> GradingPolicy {
        self.policy
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn test_count(&self) -> usize {
        self.store.test_count()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn is_full(&self) -> Result<bool> {
        Ok(self.store.len()? >= self.store.capacity())
    }

    pub fn add(&self, id: &str, name: &str, scores: Vec<f64>) -> Result<StudentRecord> {
        log_rejection("Add student", self.store.add(id, name, scores))
    }

    pub fn update_score(&self, id: &str, test_index: usize, value: f64) -> Result<f64> {
        log_rejection(
            "Score update",
            self.store.update_score(id, test_index, value),
        )
    }

    pub fn find_by_id(&self, id: &str) -> Result<usize> {
        self.store.find_by_id(id)
    }

    pub fn get(&self, id: &str) -> Result<StudentRecord> {
        self.store.get(id)
    }

    pub fn all(&self) -> Result<Vec<StudentRecord>> {
        self.store.all()
    }

    /// Full statistics, grade and verdict for one student
    pub fn report(&self, id: &str) -> Result<StudentReport> {
        let record = self.store.get(id)?;
        let stats = ScoreStats::from_scores(&record.scores)?;
        debug!("Built report for {}", record.id);

        Ok(StudentReport {
            grade: self.policy.letter_grade(stats.average).to_string(),
            verdict: self.policy.verdict(stats.average),
            total: stats.total,
            min: stats.min,
            max: stats.max,
            average: stats.average,
            id: record.id,
            name: record.name,
            scores: record.scores,
        })
    }

    /// One row per student in insertion order
    pub fn list(&self) -> Result<Vec<RosterRow>> {
        let records = self.non_empty_snapshot()?;

        Ok(records
            .into_iter()
            .map(|record| {
                let average = record.average();
                RosterRow {
                    grade: self.policy.letter_grade(average).to_string(),
                    average,
                    id: record.id,
                    name: record.name,
                }
            })
            .collect())
    }

    /// Students ordered by descending average with 1-based ranks
    pub fn ranking(&self) -> Result<Vec<RankedStudent>> {
        let records = self.non_empty_snapshot()?;
        let averages: Vec<f64> = records.iter().map(StudentRecord::average).collect();
        Ok(self.rank_snapshot(&records, &averages))
    }

    /// Class statistics and ranking
    pub fn summary(&self) -> Result<ClassSummary> {
        let records = self.non_empty_snapshot()?;
        let averages: Vec<f64> = records.iter().map(StudentRecord::average).collect();
        let student_count = records.len();

        let class_average = averages.iter().sum::<f64>() / student_count as f64;
        let best_average = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst_average = averages.iter().copied().fold(f64::INFINITY, f64::min);
        let pass_count = averages
            .iter()
            .filter(|&&average| self.policy.verdict(average).is_pass())
            .count();

        debug!(
            "Summarized {} students, {} passing",
            student_count, pass_count
        );

        Ok(ClassSummary {
            student_count,
            test_count: self.store.test_count(),
            class_average,
            best_average,
            worst_average,
            pass_count,
            pass_rate: 100.0 * pass_count as f64 / student_count as f64,
            grade_scale: self.policy.scale(),
            ranking: self.rank_snapshot(&records, &averages),
            generated_at: chrono::Utc::now(),
        })
    }

    fn non_empty_snapshot(&self) -> Result<Vec<StudentRecord>> {
        let records = self.store.all()?;
        if records.is_empty() {
            return Err(GradebookError::EmptyRoster);
        }
        Ok(records)
    }

    fn rank_snapshot(&self, records: &[StudentRecord], averages: &[f64]) -> Vec<RankedStudent> {
        self.tie_break
            .rank(averages)
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let record = &records[index];
                let average = averages[index];
                RankedStudent {
                    rank: position + 1,
                    id: record.id.clone(),
                    name: record.name.clone(),
                    average,
                    grade: self.policy.letter_grade(average).to_string(),
                    verdict: self.policy.verdict(average),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradeScale;
    use crate::types::Verdict;

    fn gradebook() -> Gradebook {
        Gradebook::in_memory(RosterConfig::with_limits(3, 50), GradingConfig::default()).unwrap()
    }

    #[test]
    fn test_report_contents() {
        let book = gradebook();
        book.add("ets001", "Alice", vec![90.0, 80.0, 70.0]).unwrap();

        let report = book.report("ETS001").unwrap();
        assert_eq!(report.id, "ets001");
        assert_eq!(report.name, "Alice");
        assert_eq!(report.total, 240.0);
        assert_eq!(report.min, 70.0);
        assert_eq!(report.max, 90.0);
        assert_eq!(report.average, 80.0);
        assert_eq!(report.grade, "A-");
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn test_report_not_found() {
        let book = gradebook();
        assert_eq!(
            book.report("ets404"),
            Err(GradebookError::NotFound {
                id: "ets404".to_string()
            })
        );
    }

    #[test]
    fn test_empty_roster_views() {
        let book = gradebook();
        assert_eq!(book.list(), Err(GradebookError::EmptyRoster));
        assert_eq!(book.summary(), Err(GradebookError::EmptyRoster));
        assert_eq!(book.ranking(), Err(GradebookError::EmptyRoster));
    }

    #[test]
    fn test_list_in_insertion_order() {
        let book = gradebook();
        book.add("ets002", "Bob", vec![40.0, 40.0, 40.0]).unwrap();
        book.add("ets001", "Alice", vec![90.0, 80.0, 70.0]).unwrap();

        let rows = book.list().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "ets002");
        assert_eq!(rows[0].grade, "F");
        assert_eq!(rows[1].id, "ets001");
        assert_eq!(rows[1].average, 80.0);
    }

    #[test]
    fn test_summary_statistics() {
        let book = gradebook();
        book.add("ets001", "Alice", vec![90.0, 80.0, 70.0]).unwrap();
        book.add("ets002", "Bob", vec![40.0, 40.0, 40.0]).unwrap();

        let summary = book.summary().unwrap();
        assert_eq!(summary.student_count, 2);
        assert_eq!(summary.test_count, 3);
        assert_eq!(summary.class_average, 60.0);
        assert_eq!(summary.best_average, 80.0);
        assert_eq!(summary.worst_average, 40.0);
        assert_eq!(summary.pass_count, 1);
        assert_eq!(summary.fail_count(), 1);
        assert_eq!(summary.pass_rate, 50.0);
        assert_eq!(summary.grade_scale, GradeScale::Fine);

        let ranked: Vec<_> = summary
            .ranking
            .iter()
            .map(|entry| (entry.rank, entry.name.as_str()))
            .collect();
        assert_eq!(ranked, vec![(1, "Alice"), (2, "Bob")]);
    }

    #[test]
    fn test_coarse_scale_and_selection_ties() {
        let book = Gradebook::in_memory(
            RosterConfig::with_limits(1, 10),
            GradingConfig {
                scale: GradeScale::Coarse,
                tie_break: TieBreak::Selection,
            },
        )
        .unwrap();
        book.add("ets1", "First", vec![50.0]).unwrap();
        book.add("ets2", "Second", vec![50.0]).unwrap();
        book.add("ets3", "Third", vec![80.0]).unwrap();

        let ranking = book.ranking().unwrap();
        let ids: Vec<_> = ranking.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["ets3", "ets2", "ets1"]);
        assert_eq!(ranking[0].grade, "B");
        assert_eq!(ranking[2].grade, "E");
    }

    #[test]
    fn test_is_full() {
        let book =
            Gradebook::in_memory(RosterConfig::with_limits(1, 1), GradingConfig::default())
                .unwrap();
        assert!(!book.is_full().unwrap());
        book.add("ets1", "Only", vec![75.0]).unwrap();
        assert!(book.is_full().unwrap());
    }
}
