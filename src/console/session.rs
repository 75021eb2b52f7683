//! Interactive menu session over a gradebook
//!
//! The session owns all prompting and printing. Core errors caused by user
//! input are shown as messages and the menu continues; internal errors end
//! the session.

use crate::config::{AppConfig, RosterConfig};
use crate::console::prompt::Prompter;
use crate::console::render::Renderer;
use crate::error::GradebookError;
use crate::report::Gradebook;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

const MENU: &str = "\nMenu
 1) Add a student record
 2) Update a student's assessment score
 3) Generate an individual student report
 4) Generate class summary and performance ranking
 5) Display all student records
 0) Exit the program";

/// Menu entries in the order they are numbered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddStudent,
    UpdateScore,
    StudentReport,
    ClassSummary,
    ListStudents,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::AddStudent),
            2 => Some(MenuChoice::UpdateScore),
            3 => Some(MenuChoice::StudentReport),
            4 => Some(MenuChoice::ClassSummary),
            5 => Some(MenuChoice::ListStudents),
            _ => None,
        }
    }
}

/// Ask for the assessment count unless the configuration already fixes it
pub fn resolve_test_count<R: BufRead, W: Write>(
    config: &AppConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<usize>> {
    if let Some(test_count) = config.roster.test_count {
        return Ok(Some(test_count));
    }

    let max = config.roster.max_tests as i64;
    let answer = prompter.read_int_in_range(
        &format!("Enter the number of assessments per student (1-{}): ", max),
        1,
        max,
    )?;
    Ok(answer.map(|count| count as usize))
}

/// One operator session against one roster
#[derive(Debug)]
pub struct Session<R, W> {
    gradebook: Gradebook,
    roster: RosterConfig,
    prompter: Prompter<R, W>,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(gradebook: Gradebook, prompter: Prompter<R, W>, renderer: Renderer) -> Self {
        Self {
            roster: gradebook.store().config().clone(),
            gradebook,
            prompter,
            renderer,
        }
    }

    /// Build a session from configuration, prompting for the assessment count if needed
    ///
    /// Returns `None` when input ends before the roster could be created.
    pub fn from_config(config: &AppConfig, mut prompter: Prompter<R, W>) -> Result<Option<Self>> {
        let Some(test_count) = resolve_test_count(config, &mut prompter)? else {
            return Ok(None);
        };

        let gradebook = Gradebook::in_memory(
            config.roster.to_roster_config(test_count),
            config.grading,
        )?;
        let renderer = Renderer::new(config.output.format, config.output.decimals);

        info!(
            "Roster created: {} assessment(s), capacity {}",
            test_count, config.roster.capacity
        );
        Ok(Some(Self::new(gradebook, prompter, renderer)))
    }

    pub fn gradebook(&self) -> &Gradebook {
        &self.gradebook
    }

    /// Give back the prompter once the session is over
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run the menu loop until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompter.say(MENU)?;
            let Some(number) = self.prompter.read_int_in_range("Choice: ", 0, 5)? else {
                break;
            };

            let keep_going = match MenuChoice::from_number(number) {
                Some(MenuChoice::Exit) | None => false,
                Some(MenuChoice::AddStudent) => self.add_student()?,
                Some(MenuChoice::UpdateScore) => self.update_score()?,
                Some(MenuChoice::StudentReport) => self.student_report()?,
                Some(MenuChoice::ClassSummary) => self.class_summary()?,
                Some(MenuChoice::ListStudents) => self.list_students()?,
            };

            if !keep_going {
                break;
            }
        }

        self.prompter.say("\nGoodbye!")?;
        info!("Session ended");
        Ok(())
    }

    /// Show a user-facing error, or propagate an internal one
    fn show_error(&mut self, err: GradebookError) -> Result<()> {
        if err.is_user_error() {
            self.prompter.say(&user_message(&err))
        } else {
            Err(err.into())
        }
    }

    // Each action returns Ok(false) when input ran out mid-action.

    fn add_student(&mut self) -> Result<bool> {
        if self.gradebook.is_full()? {
            let capacity = self.gradebook.capacity();
            self.show_error(GradebookError::RosterFull { capacity })?;
            return Ok(true);
        }

        let Some(id) = self.prompter.read_id("Enter a new student ID: ", &self.roster)? else {
            return Ok(false);
        };
        if self.gradebook.find_by_id(&id).is_ok() {
            self.show_error(GradebookError::DuplicateId { id })?;
            return Ok(true);
        }

        let Some(name) = self.prompter.read_name("Enter the student name: ", &self.roster)? else {
            return Ok(false);
        };

        let test_count = self.gradebook.test_count();
        self.prompter.say(&format!(
            "Enter the scores for {} assessment(s) (0 to 100).",
            test_count
        ))?;
        let mut scores = Vec::with_capacity(test_count);
        for number in 1..=test_count {
            let Some(score) = self.prompter.read_score(&format!("  Score {}: ", number))? else {
                return Ok(false);
            };
            scores.push(score);
        }

        match self.gradebook.add(&id, &name, scores) {
            Ok(_) => self.prompter.say("Student added.")?,
            Err(e) => self.show_error(e)?,
        }
        Ok(true)
    }

    fn update_score(&mut self) -> Result<bool> {
        let Some(id) = self.prompter.read_id("Enter student ID: ", &self.roster)? else {
            return Ok(false);
        };
        let record = match self.gradebook.get(&id) {
            Ok(record) => record,
            Err(e) => {
                self.show_error(e)?;
                return Ok(true);
            }
        };

        self.prompter.say(&format!(
            "Updating assessment score(s) for {} ({}).",
            record.name, record.id
        ))?;
        self.prompter.say("Select the assessment to update:")?;
        for (index, score) in record.scores.iter().enumerate() {
            self.prompter
                .say(&format!(" {}) Current score: {}", index + 1, score))?;
        }

        let test_count = record.scores.len() as i64;
        let Some(number) = self
            .prompter
            .read_int_in_range("Assessment number: ", 1, test_count)?
        else {
            return Ok(false);
        };
        let Some(value) = self.prompter.read_score("New score: ")? else {
            return Ok(false);
        };

        match self
            .gradebook
            .update_score(&record.id, (number - 1) as usize, value)
        {
            Ok(_) => self.prompter.say("Updated.")?,
            Err(e) => self.show_error(e)?,
        }
        Ok(true)
    }

    fn student_report(&mut self) -> Result<bool> {
        let Some(id) = self.prompter.read_id("Enter student ID: ", &self.roster)? else {
            return Ok(false);
        };

        match self.gradebook.report(&id) {
            Ok(report) => {
                let text = self.renderer.report(&report)?;
                self.prompter.say(&text)?;
            }
            Err(e) => self.show_error(e)?,
        }
        Ok(true)
    }

    fn class_summary(&mut self) -> Result<bool> {
        match self.gradebook.summary() {
            Ok(summary) => {
                let text = self.renderer.summary(&summary)?;
                self.prompter.say(&text)?;
            }
            Err(e) => self.show_error(e)?,
        }
        Ok(true)
    }

    fn list_students(&mut self) -> Result<bool> {
        match self.gradebook.list() {
            Ok(rows) => {
                let text = self.renderer.listing(&rows)?;
                self.prompter.say(&text)?;
            }
            Err(e) => self.show_error(e)?,
        }
        Ok(true)
    }
}

fn user_message(err: &GradebookError) -> String {
    match err {
        GradebookError::NotFound { .. } => "Student not found!".to_string(),
        GradebookError::EmptyRoster => "No students yet.".to_string(),
        GradebookError::DuplicateId { .. } => "Student ID already exists!".to_string(),
        GradebookError::RosterFull { capacity } => {
            format!("Class is full (maximum of {} students reached).", capacity)
        }
        other => other.to_string(),
    }
}
