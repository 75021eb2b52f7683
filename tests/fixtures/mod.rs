//! Shared builders for integration tests

#![allow(dead_code)]

use gradebook::config::{AppConfig, GradingConfig, RosterConfig};
use gradebook::console::{Prompter, Session};
use gradebook::Gradebook;
use std::io::Cursor;

/// Gradebook with the default grading settings
pub fn gradebook(test_count: usize, capacity: usize) -> Gradebook {
    Gradebook::in_memory(
        RosterConfig::with_limits(test_count, capacity),
        GradingConfig::default(),
    )
    .expect("test roster limits are valid")
}

/// Gradebook with explicit grading settings
pub fn gradebook_with(test_count: usize, capacity: usize, grading: GradingConfig) -> Gradebook {
    Gradebook::in_memory(RosterConfig::with_limits(test_count, capacity), grading)
        .expect("test roster limits are valid")
}

/// Three assessments, Alice at 80.0 and Bob at 40.0
pub fn alice_and_bob() -> Gradebook {
    let book = gradebook(3, 50);
    book.add("ets001", "Alice", vec![90.0, 80.0, 70.0])
        .expect("Alice is valid");
    book.add("ets002", "Bob", vec![40.0, 40.0, 40.0])
        .expect("Bob is valid");
    book
}

/// Output and final gradebook of a session fed with scripted input
pub struct SessionRun {
    pub output: String,
    pub gradebook: Option<Gradebook>,
}

/// Drive a full session from configuration with the given lines of input
pub fn run_session(config: &AppConfig, input: &str) -> SessionRun {
    let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    match Session::from_config(config, prompter).expect("session starts") {
        Some(mut session) => {
            session.run().expect("session runs");
            let gradebook = session.gradebook().clone();
            let output = session.into_prompter().into_output();
            SessionRun {
                output: String::from_utf8(output).expect("utf-8 output"),
                gradebook: Some(gradebook),
            }
        }
        None => SessionRun {
            output: String::new(),
            gradebook: None,
        },
    }
}

/// Configuration with a fixed assessment count
pub fn config_with_tests(test_count: usize) -> AppConfig {
    let mut config = AppConfig::default();
    config.roster.test_count = Some(test_count);
    config
}
