//! Property tests for statistics, ranking and class summaries

mod fixtures;

use gradebook::ranking::TieBreak;
use gradebook::stats::{self, ScoreStats};
use gradebook::{GradebookError, PASS_MARK};
use proptest::prelude::*;

fn scores(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..=100.0f64, 1..=max_len)
}

proptest! {
    #[test]
    fn stats_are_consistent(values in scores(8)) {
        let stats = ScoreStats::from_scores(&values).unwrap();
        let expected_sum: f64 = values.iter().sum();

        prop_assert!((stats.total - expected_sum).abs() < 1e-9);
        prop_assert!((stats.average - stats.total / values.len() as f64).abs() < 1e-9);
        prop_assert!(values.iter().all(|&v| stats.min <= v && v <= stats.max));
        prop_assert_eq!(stats.min, stats::min(&values).unwrap());
        prop_assert_eq!(stats.max, stats::max(&values).unwrap());
    }

    #[test]
    fn ranking_is_a_non_increasing_permutation(
        averages in prop::collection::vec(0.0..=100.0f64, 0..40),
        selection in any::<bool>(),
    ) {
        let tie_break = if selection { TieBreak::Selection } else { TieBreak::Insertion };
        let order = tie_break.rank(&averages);

        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..averages.len()).collect::<Vec<_>>());
        prop_assert!(order.windows(2).all(|pair| averages[pair[0]] >= averages[pair[1]]));
    }

    #[test]
    fn insertion_ranking_is_stable(averages in prop::collection::vec(0u8..5, 0..30)) {
        let averages: Vec<f64> = averages.into_iter().map(|a| a as f64 * 25.0).collect();
        let order = TieBreak::Insertion.rank(&averages);

        for pair in order.windows(2) {
            if averages[pair[0]] == averages[pair[1]] {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn summary_pass_rate_matches_definition(
        students in prop::collection::vec(prop::collection::vec(0.0..=100.0f64, 3), 1..25),
    ) {
        let book = fixtures::gradebook(3, 50);
        for (n, scores) in students.iter().enumerate() {
            book.add(&format!("ets{}", n), "Student", scores.clone()).unwrap();
        }

        let summary = book.summary().unwrap();
        let averages: Vec<f64> = students.iter().map(|s| stats::average(s)).collect();
        let passing = averages.iter().filter(|&&a| a >= PASS_MARK).count();

        prop_assert_eq!(summary.student_count, students.len());
        prop_assert_eq!(summary.pass_count, passing);
        prop_assert!(
            (summary.pass_rate - 100.0 * passing as f64 / students.len() as f64).abs() < 1e-9
        );
        prop_assert!(summary.worst_average <= summary.class_average + 1e-9);
        prop_assert!(summary.class_average <= summary.best_average + 1e-9);
        prop_assert_eq!(summary.ranking.len(), students.len());
        prop_assert!(summary
            .ranking
            .iter()
            .enumerate()
            .all(|(position, entry)| entry.rank == position + 1));
    }

    #[test]
    fn out_of_range_updates_never_write(
        index in 0usize..6,
        value in -50.0..150.0f64,
    ) {
        let book = fixtures::alice_and_bob();
        let before = book.all().unwrap();

        match book.update_score("ets001", index, value) {
            Ok(previous) => {
                prop_assert!(index < 3 && (0.0..=100.0).contains(&value));
                prop_assert_eq!(previous, before[0].scores[index]);
                prop_assert_eq!(book.all().unwrap()[0].scores[index], value);
            }
            Err(GradebookError::InvalidIndex { .. }) => {
                prop_assert!(index >= 3);
                prop_assert_eq!(book.all().unwrap(), before);
            }
            Err(GradebookError::InvalidScore { .. }) => {
                prop_assert!(!(0.0..=100.0).contains(&value));
                prop_assert_eq!(book.all().unwrap(), before);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
