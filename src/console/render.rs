//! Console rendering of gradebook views as fixed-width tables or JSON

use crate::config::OutputFormat;
use crate::report::{ClassSummary, RankedStudent, RosterRow, StudentReport};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

const RANK_WIDTH: usize = 5;
const ID_WIDTH: usize = 14;
const NAME_WIDTH: usize = 20;
const AVERAGE_WIDTH: usize = 10;
const GRADE_WIDTH: usize = 8;

/// Formats views in the configured output format
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    decimals: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::Table, 2)
    }
}

impl Renderer {
    pub fn new(format: OutputFormat, decimals: usize) -> Self {
        Self { format, decimals }
    }

    pub fn report(&self, report: &StudentReport) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.report_table(report)),
            OutputFormat::Json => to_json(report),
        }
    }

    pub fn listing(&self, rows: &[RosterRow]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.listing_table(rows)),
            OutputFormat::Json => to_json(&rows),
        }
    }

    pub fn summary(&self, summary: &ClassSummary) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.summary_table(summary)),
            OutputFormat::Json => to_json(summary),
        }
    }

    fn fixed(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }

    fn report_table(&self, report: &StudentReport) -> String {
        let scores = report
            .scores
            .iter()
            .map(|&score| format_score(score))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        let _ = writeln!(out, "\n--- Student Report ---\n");
        let _ = writeln!(out, "ID:           {}", report.id);
        let _ = writeln!(out, "Name:         {}", report.name);
        let _ = writeln!(out, "Scores:       {}", scores);
        let _ = writeln!(out, "Total:        {}", self.fixed(report.total));
        let _ = writeln!(out, "Lowest:       {}", format_score(report.min));
        let _ = writeln!(out, "Highest:      {}", format_score(report.max));
        let _ = writeln!(out, "Average:      {}", self.fixed(report.average));
        let _ = writeln!(out, "Grade:        {}", report.grade);
        let _ = writeln!(out, "Status:       {}", report.verdict);
        out
    }

    fn listing_table(&self, rows: &[RosterRow]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n--- Student List ---\n");
        let _ = writeln!(
            out,
            "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:>AVERAGE_WIDTH$}{:>GRADE_WIDTH$}",
            "ID", "Name", "Average", "Grade"
        );
        let _ = writeln!(
            out,
            "{}",
            "-".repeat(ID_WIDTH + NAME_WIDTH + AVERAGE_WIDTH + GRADE_WIDTH)
        );

        for row in rows {
            let _ = writeln!(
                out,
                "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:>AVERAGE_WIDTH$}{:>GRADE_WIDTH$}",
                row.id,
                fit(&row.name, NAME_WIDTH),
                self.fixed(row.average),
                row.grade
            );
        }
        out
    }

    fn summary_table(&self, summary: &ClassSummary) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n--- Class Summary ---\n");
        let _ = writeln!(out, "Number of Students : {}", summary.student_count);
        let _ = writeln!(out, "Assessments        : {}", summary.test_count);
        let _ = writeln!(
            out,
            "Class Average      : {}",
            self.fixed(summary.class_average)
        );
        let _ = writeln!(
            out,
            "Highest Average    : {}",
            self.fixed(summary.best_average)
        );
        let _ = writeln!(
            out,
            "Lowest Average     : {}",
            self.fixed(summary.worst_average)
        );
        let _ = writeln!(
            out,
            "Pass Rate          : {}%",
            self.fixed(summary.pass_rate)
        );
        out.push_str(&self.ranking_table(&summary.ranking));
        out
    }

    fn ranking_table(&self, ranking: &[RankedStudent]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n--- Performance Ranking (Highest to Lowest) ---\n");
        let _ = writeln!(
            out,
            "{:<RANK_WIDTH$}{:<ID_WIDTH$}{:<NAME_WIDTH$}{:>AVERAGE_WIDTH$}{:>GRADE_WIDTH$}",
            "#", "ID", "Name", "Average", "Grade"
        );
        let _ = writeln!(
            out,
            "{}",
            "-".repeat(RANK_WIDTH + ID_WIDTH + NAME_WIDTH + AVERAGE_WIDTH + GRADE_WIDTH)
        );

        for entry in ranking {
            let _ = writeln!(
                out,
                "{:<RANK_WIDTH$}{:<ID_WIDTH$}{:<NAME_WIDTH$}{:>AVERAGE_WIDTH$}{:>GRADE_WIDTH$}",
                entry.rank,
                entry.id,
                fit(&entry.name, NAME_WIDTH),
                self.fixed(entry.average),
                entry.grade
            );
        }
        out
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize view to JSON")
}

/// Whole scores print without decimals
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{}", score)
    }
}

/// Truncate to leave at least one space before the next column
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() < width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(2)).collect();
    shortened.push('~');
    shortened
}
