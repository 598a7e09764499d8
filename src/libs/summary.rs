//! Per-section and per-date totals of a parsed timesheet.

use crate::libs::formatter::{format_difference, format_expected, format_minutes};
use crate::libs::timesheet::validator::group_by_date;
use crate::libs::timesheet::{Document, Section};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub task_count: usize,
    pub total_minutes: i32,
    pub expected_minutes: Option<i32>,
    /// `total - expected`, only when the section has a target.
    pub difference_minutes: Option<i32>,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        let total_minutes = section.total_minutes();
        SectionSummary {
            name: section.name.clone(),
            task_count: section.tasks.len(),
            total_minutes,
            expected_minutes: section.expected_minutes,
            difference_minutes: section.expected_minutes.map(|expected| total_minutes - expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTotal {
    pub date: Option<String>,
    pub total_minutes: i32,
}

/// Pre-formatted row for the section table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSectionSummary {
    pub name: String,
    pub task_count: usize,
    pub total: String,
    pub expected: String,
    pub difference: String,
}

impl From<&SectionSummary> for FormattedSectionSummary {
    fn from(summary: &SectionSummary) -> Self {
        FormattedSectionSummary {
            name: summary.name.clone(),
            task_count: summary.task_count,
            total: format_minutes(summary.total_minutes),
            expected: format_expected(summary.expected_minutes),
            difference: summary.difference_minutes.map(format_difference).unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub trait Summarize {
    fn section_summaries(&self) -> Vec<SectionSummary>;
    fn date_totals(&self) -> Vec<DateTotal>;
    fn total_minutes(&self) -> i32;
}

impl Summarize for Document {
    fn section_summaries(&self) -> Vec<SectionSummary> {
        self.sections.iter().map(SectionSummary::from).collect()
    }

    fn date_totals(&self) -> Vec<DateTotal> {
        group_by_date(&self.tasks)
            .into_iter()
            .map(|(date, tasks)| DateTotal {
                date: date.map(str::to_string),
                total_minutes: tasks.iter().map(|task| task.total_minutes).sum(),
            })
            .collect()
    }

    fn total_minutes(&self) -> i32 {
        self.tasks.iter().map(|task| task.total_minutes).sum()
    }
}
