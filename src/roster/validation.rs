//! Input rules for student identifiers, names and scores
//!
//! The console layer already retries until input looks valid, but the store
//! re-checks everything here before it touches its records.

use crate::config::RosterConfig;
use crate::error::{GradebookError, Result};
use crate::types::{is_valid_score, StudentId};

/// Normalize a candidate ID to its stored, lower-cased form
///
/// The ID must start with the configured prefix (any case), carry at least
/// one character after it, contain no whitespace and fit `max_id_len`.
pub fn normalize_id(raw: &str, config: &RosterConfig) -> Result<StudentId> {
    let candidate = raw.trim();
    let prefix = config.id_prefix.to_lowercase();
    let prefix_len = prefix.chars().count();
    let reject = |reason: String| GradebookError::InvalidIdFormat {
        id: candidate.to_string(),
        reason,
    };

    if candidate.chars().any(char::is_whitespace) {
        return Err(reject("ID cannot contain spaces".to_string()));
    }

    let normalized = candidate.to_lowercase();
    let length = normalized.chars().count();

    if length <= prefix_len || !normalized.starts_with(&prefix) {
        return Err(reject(format!(
            "ID must start with '{}' and include more characters after it",
            config.id_prefix
        )));
    }
    if length > config.max_id_len {
        return Err(reject(format!(
            "ID is too long (max {} characters)",
            config.max_id_len
        )));
    }

    Ok(normalized)
}

/// Key used to look up an ID without enforcing the format rule
pub fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trim and check a display name
pub fn normalize_name(raw: &str, config: &RosterConfig) -> Result<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(GradebookError::InvalidName {
            reason: "name cannot be empty".to_string(),
        });
    }
    if name.chars().count() > config.max_name_len {
        return Err(GradebookError::InvalidName {
            reason: format!("name is too long (max {} characters)", config.max_name_len),
        });
    }

    Ok(name.to_string())
}

/// Check a single score against [0, 100]
pub fn validate_score(value: f64) -> Result<()> {
    if is_valid_score(value) {
        Ok(())
    } else {
        Err(GradebookError::InvalidScore { value })
    }
}

/// Check the length of a score sequence and every value in it
pub fn validate_scores(scores: &[f64], test_count: usize) -> Result<()> {
    if scores.len() != test_count {
        return Err(GradebookError::ScoreCountMismatch {
            expected: test_count,
            actual: scores.len(),
        });
    }

    scores.iter().try_for_each(|&score| validate_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RosterConfig {
        RosterConfig::default()
    }

    #[test]
    fn test_id_normalization() {
        assert_eq!(normalize_id("ets001", &config()).unwrap(), "ets001");
        assert_eq!(normalize_id("ETS001", &config()).unwrap(), "ets001");
        assert_eq!(normalize_id("EtS42a", &config()).unwrap(), "ets42a");
        assert_eq!(normalize_id("  ets7  ", &config()).unwrap(), "ets7");
    }

    #[test]
    fn test_id_requires_prefix_and_suffix() {
        for bad in ["ets", "ETS", "abc123", "et", "", "1ets"] {
            assert!(
                matches!(
                    normalize_id(bad, &config()),
                    Err(GradebookError::InvalidIdFormat { .. })
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_id_length_and_spaces() {
        // max_id_len defaults to 10
        assert!(normalize_id("ets1234567", &config()).is_ok());
        assert!(normalize_id("ets12345678", &config()).is_err());
        assert!(normalize_id("ets 100", &config()).is_err());
    }

    #[test]
    fn test_custom_prefix() {
        let config = RosterConfig {
            id_prefix: "STU".to_string(),
            ..RosterConfig::default()
        };
        assert_eq!(normalize_id("stu9", &config).unwrap(), "stu9");
        assert!(normalize_id("ets9", &config).is_err());
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(normalize_name(" Alice ", &config()).unwrap(), "Alice");
        assert_eq!(
            normalize_name("Mary Jane", &config()).unwrap(),
            "Mary Jane"
        );
        assert!(normalize_name("   ", &config()).is_err());
        assert!(normalize_name(&"x".repeat(32), &config()).is_err());
        assert!(normalize_name(&"x".repeat(31), &config()).is_ok());
    }

    #[test]
    fn test_score_rules() {
        assert!(validate_scores(&[0.0, 100.0, 55.0], 3).is_ok());
        assert_eq!(
            validate_scores(&[10.0, 20.0], 3),
            Err(GradebookError::ScoreCountMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            validate_scores(&[10.0, 101.0, 20.0], 3),
            Err(GradebookError::InvalidScore { value: 101.0 })
        );
        assert!(validate_score(-1.0).is_err());
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key(" ETS100 "), "ets100");
        assert_eq!(lookup_key("nonexistent"), "nonexistent");
    }
}
