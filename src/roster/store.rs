//! Roster storage interface and in-memory implementation
//!
//! The store owns every student record. Mutations run as single write-locked
//! transactions and reads clone under one read lock, so callers never see a
//! record halfway through an update.

use crate::config::RosterConfig;
use crate::error::{GradebookError, Result};
use crate::roster::validation::{
    lookup_key, normalize_id, normalize_name, validate_score, validate_scores,
};
use crate::types::StudentRecord;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Trait for roster storage operations
pub trait RosterStore: Send + Sync {
    /// Limits this roster was created with
    fn config(&self) -> &RosterConfig;

    /// Position of the student with this ID (case-insensitive) in insertion order
    fn find_by_id(&self, id: &str) -> Result<usize>;

    /// Copy of the student with this ID
    fn get(&self, id: &str) -> Result<StudentRecord>;

    /// Append a new student, returning the record as stored
    fn add(&self, id: &str, name: &str, scores: Vec<f64>) -> Result<StudentRecord>;

    /// Overwrite one assessment score, returning the previous value
    fn update_score(&self, id: &str, test_index: usize, value: f64) -> Result<f64>;

    /// Snapshot of all students in insertion order
    fn all(&self) -> Result<Vec<StudentRecord>>;

    /// Number of students currently stored
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn test_count(&self) -> usize {
        self.config().test_count
    }

    fn capacity(&self) -> usize {
        self.config().capacity
    }
}

/// In-memory roster backed by a bounded vector
#[derive(Debug)]
pub struct InMemoryRoster {
    records: RwLock<Vec<StudentRecord>>,
    config: RosterConfig,
}

impl InMemoryRoster {
    /// Create an empty roster after validating its limits
    pub fn new(config: RosterConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            records: RwLock::new(Vec::new()),
            config,
        })
    }

    /// Create an empty roster with default ID and name rules
    pub fn with_limits(test_count: usize, capacity: usize) -> Result<Self> {
        Self::new(RosterConfig::with_limits(test_count, capacity))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<StudentRecord>>> {
        self.records.read().map_err(|_| GradebookError::Internal {
            message: "Failed to acquire roster read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<StudentRecord>>> {
        self.records.write().map_err(|_| GradebookError::Internal {
            message: "Failed to acquire roster write lock".to_string(),
        })
    }
}

fn position(records: &[StudentRecord], key: &str) -> Option<usize> {
    records.iter().position(|record| record.id == key)
}

impl RosterStore for InMemoryRoster {
    fn config(&self) -> &RosterConfig {
        &self.config
    }

    fn find_by_id(&self, id: &str) -> Result<usize> {
        let key = lookup_key(id);
        let records = self.read()?;

        let index = position(&records, &key).ok_or(GradebookError::NotFound { id: key })?;
        debug!("Found student {} at position {}", records[index].id, index);
        Ok(index)
    }

    fn get(&self, id: &str) -> Result<StudentRecord> {
        let key = lookup_key(id);
        let records = self.read()?;

        records
            .iter()
            .find(|record| record.id == key)
            .cloned()
            .ok_or(GradebookError::NotFound { id: key })
    }

    fn add(&self, id: &str, name: &str, scores: Vec<f64>) -> Result<StudentRecord> {
        let mut records = self.write()?;

        if records.len() >= self.config.capacity {
            return Err(GradebookError::RosterFull {
                capacity: self.config.capacity,
            });
        }

        let id = normalize_id(id, &self.config)?;
        if position(&records, &id).is_some() {
            return Err(GradebookError::DuplicateId { id });
        }

        let name = normalize_name(name, &self.config)?;
        validate_scores(&scores, self.config.test_count)?;

        let record = StudentRecord::new(id, name, scores);
        records.push(record.clone());

        info!(
            "Added student {} ({}), roster size {}/{}",
            record.id,
            record.name,
            records.len(),
            self.config.capacity
        );
        Ok(record)
    }

    fn update_score(&self, id: &str, test_index: usize, value: f64) -> Result<f64> {
        let key = lookup_key(id);
        let mut records = self.write()?;

        let index = position(&records, &key).ok_or(GradebookError::NotFound { id: key })?;
        if test_index >= self.config.test_count {
            return Err(GradebookError::InvalidIndex {
                index: test_index,
                test_count: self.config.test_count,
            });
        }
        validate_score(value)?;

        let record = &mut records[index];
        let previous = std::mem::replace(&mut record.scores[test_index], value);

        info!(
            "Updated student {} assessment {}: {} -> {}",
            record.id,
            test_index + 1,
            previous,
            value
        );
        Ok(previous)
    }

    fn all(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.read()?.clone())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
