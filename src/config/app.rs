//! Main application configuration
//!
//! This module defines the top-level configuration for the gradebook,
//! including TOML file and environment variable loading and validation.

use crate::config::grading::GradingConfig;
use crate::config::roster::RosterConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub roster: RosterSettings,
    pub grading: GradingConfig,
    pub output: OutputSettings,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name shown in the banner and logs
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Roster settings as configured, before the assessment count is settled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Assessments per student; prompted for at startup when unset
    pub test_count: Option<usize>,
    /// Upper bound for the assessment count
    pub max_tests: usize,
    /// Maximum number of students
    pub capacity: usize,
    /// Required ID prefix, matched case-insensitively
    pub id_prefix: String,
    /// Longest accepted ID
    pub max_id_len: usize,
    /// Longest accepted name
    pub max_name_len: usize,
}

/// How views are printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Decimal places for averages and rates in tables
    pub decimals: usize,
}

/// Rendering format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected 'table' or 'json'",
                other
            )),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "gradebook".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        let limits = RosterConfig::default();
        Self {
            test_count: None,
            max_tests: limits.max_tests,
            capacity: limits.capacity,
            id_prefix: limits.id_prefix,
            max_id_len: limits.max_id_len,
            max_name_len: limits.max_name_len,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            decimals: 2,
        }
    }
}

impl RosterSettings {
    /// Concrete roster limits for the given assessment count
    pub fn to_roster_config(&self, test_count: usize) -> RosterConfig {
        RosterConfig {
            test_count,
            max_tests: self.max_tests,
            capacity: self.capacity,
            id_prefix: self.id_prefix.clone(),
            max_id_len: self.max_id_len,
            max_name_len: self.max_name_len,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("GRADEBOOK_SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("GRADEBOOK_LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Roster settings
        if let Ok(tests) = env::var("GRADEBOOK_TEST_COUNT") {
            config.roster.test_count = Some(
                tests
                    .parse()
                    .map_err(|_| anyhow!("Invalid GRADEBOOK_TEST_COUNT value: {}", tests))?,
            );
        }
        if let Ok(max_tests) = env::var("GRADEBOOK_MAX_TESTS") {
            config.roster.max_tests = max_tests
                .parse()
                .map_err(|_| anyhow!("Invalid GRADEBOOK_MAX_TESTS value: {}", max_tests))?;
        }
        if let Ok(capacity) = env::var("GRADEBOOK_CAPACITY") {
            config.roster.capacity = capacity
                .parse()
                .map_err(|_| anyhow!("Invalid GRADEBOOK_CAPACITY value: {}", capacity))?;
        }
        if let Ok(prefix) = env::var("GRADEBOOK_ID_PREFIX") {
            config.roster.id_prefix = prefix;
        }
        if let Ok(max_id_len) = env::var("GRADEBOOK_MAX_ID_LEN") {
            config.roster.max_id_len = max_id_len
                .parse()
                .map_err(|_| anyhow!("Invalid GRADEBOOK_MAX_ID_LEN value: {}", max_id_len))?;
        }
        if let Ok(max_name_len) = env::var("GRADEBOOK_MAX_NAME_LEN") {
            config.roster.max_name_len = max_name_len
                .parse()
                .map_err(|_| anyhow!("Invalid GRADEBOOK_MAX_NAME_LEN value: {}", max_name_len))?;
        }

        // Grading settings
        if let Ok(scale) = env::var("GRADEBOOK_GRADE_SCALE") {
            config.grading.scale = scale
                .parse()
                .map_err(|e| anyhow!("Invalid GRADEBOOK_GRADE_SCALE value: {}", e))?;
        }
        if let Ok(tie_break) = env::var("GRADEBOOK_TIE_BREAK") {
            config.grading.tie_break = tie_break
                .parse()
                .map_err(|e| anyhow!("Invalid GRADEBOOK_TIE_BREAK value: {}", e))?;
        }

        // Output settings
        if let Ok(format) = env::var("GRADEBOOK_OUTPUT_FORMAT") {
            config.output.format = format
                .parse()
                .map_err(|e| anyhow!("Invalid GRADEBOOK_OUTPUT_FORMAT value: {}", e))?;
        }
        if let Ok(decimals) = env::var("GRADEBOOK_DECIMALS") {
            config.output.decimals = decimals
                .parse()
                .map_err(|_| anyhow!("Invalid GRADEBOOK_DECIMALS value: {}", decimals))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate roster limits; an unset assessment count is checked against the smallest legal value
    let test_count = config.roster.test_count.unwrap_or(1);
    config
        .roster
        .to_roster_config(test_count)
        .validate()
        .map_err(|e| anyhow!("{}", e))?;

    // Validate output settings
    if config.output.decimals > 6 {
        return Err(anyhow!("Decimals must be at most 6"));
    }

    Ok(())
}
