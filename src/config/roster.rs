//! Roster limits and identifier rules

use crate::error::{GradebookError, Result};
use serde::{Deserialize, Serialize};

/// Largest roster a configuration may ask for
pub const CAPACITY_LIMIT: usize = 10_000;

/// Largest assessment count a configuration may allow
pub const MAX_TESTS_LIMIT: usize = 64;

/// Concrete limits a roster is created with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Assessments recorded per student, fixed for the roster's lifetime
    pub test_count: usize,
    /// Upper bound accepted for `test_count`
    pub max_tests: usize,
    /// Maximum number of students
    pub capacity: usize,
    /// Required, case-insensitive ID prefix
    pub id_prefix: String,
    /// Longest accepted ID, prefix included
    pub max_id_len: usize,
    /// Longest accepted display name
    pub max_name_len: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            test_count: 3,
            max_tests: 8,
            capacity: 50,
            id_prefix: "ets".to_string(),
            max_id_len: 10,
            max_name_len: 31,
        }
    }
}

impl RosterConfig {
    /// Default limits with the given assessment count and capacity
    pub fn with_limits(test_count: usize, capacity: usize) -> Self {
        Self {
            test_count,
            capacity,
            ..Self::default()
        }
    }

    /// Check the limits before a roster is built from them
    pub fn validate(&self) -> Result<()> {
        if self.max_tests == 0 || self.max_tests > MAX_TESTS_LIMIT {
            return Err(invalid(&format!(
                "max_tests must be in [1, {}], got {}",
                MAX_TESTS_LIMIT, self.max_tests
            )));
        }
        if self.test_count == 0 || self.test_count > self.max_tests {
            return Err(invalid(&format!(
                "test_count must be in [1, {}], got {}",
                self.max_tests, self.test_count
            )));
        }
        if self.capacity == 0 || self.capacity > CAPACITY_LIMIT {
            return Err(invalid(&format!(
                "capacity must be in [1, {}], got {}",
                CAPACITY_LIMIT, self.capacity
            )));
        }
        if self.id_prefix.trim().is_empty() {
            return Err(invalid("id_prefix cannot be empty"));
        }
        if self.max_id_len <= self.id_prefix.chars().count() {
            return Err(invalid("max_id_len must leave room after the ID prefix"));
        }
        if self.max_name_len == 0 {
            return Err(invalid("max_name_len must be greater than 0"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> GradebookError {
    GradebookError::InvalidConfiguration {
        message: message.to_string(),
    }
}
