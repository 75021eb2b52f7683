//! Configuration management for the gradebook
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod grading;
pub mod roster;

// Re-export commonly used types
pub use app::{
    validate_config, AppConfig, OutputFormat, OutputSettings, RosterSettings, ServiceSettings,
};
pub use grading::GradingConfig;
pub use roster::{RosterConfig, CAPACITY_LIMIT, MAX_TESTS_LIMIT};
