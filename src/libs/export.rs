//! Export of parsed timesheets to CSV and JSON.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::libs::export::{ExportData, ExportFormat, Exporter};
//! use tally::libs::task::TaskFilter;
//! use tally::libs::timesheet::parse;
//! use std::path::PathBuf;
//!
//! let parsed = parse("=== Dev ===\n09:00 - 10:00 work\n")?;
//! let exporter = Exporter::new(ExportFormat::Csv, Some(PathBuf::from("tasks.csv")));
//! exporter.export(ExportData::Tasks, &parsed, &TaskFilter::All)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::{format_difference, format_expected, format_minutes, FormattedTask};
use crate::libs::summary::{DateTotal, SectionSummary, Summarize};
use crate::libs::task::{FilterTasks, Task, TaskFilter};
use crate::libs::timesheet::{Diagnostic, Parsed};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output path that sends the export to stdout.
pub const STDOUT_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task or section.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Every task with its stamped section and date.
    Tasks,
    /// Section totals against their targets, plus per-date totals.
    Summary,
    /// Tasks, summary and diagnostics together.
    All,
}

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub sections: Vec<SectionSummary>,
    pub dates: Vec<DateTotal>,
    pub total_minutes: i32,
}

#[derive(Debug, Serialize)]
pub struct ExportAll<'a> {
    pub summary: ExportSummary,
    pub tasks: Vec<&'a Task>,
    pub diagnostics: &'a [Diagnostic],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without a path a timestamped file name is
    /// generated in the current directory; `-` writes to stdout.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("tally_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn is_stdout(&self) -> bool {
        self.output_path.as_os_str() == STDOUT_PATH
    }

    pub fn export(&self, data: ExportData, parsed: &Parsed, filter: &TaskFilter) -> Result<()> {
        if self.is_stdout() {
            self.write(data, parsed, filter, io::stdout().lock())
        } else {
            self.write(data, parsed, filter, File::create(&self.output_path)?)
        }
    }

    /// Writes the export into any writer.
    pub fn write<W: Write>(&self, data: ExportData, parsed: &Parsed, filter: &TaskFilter, writer: W) -> Result<()> {
        let tasks = parsed.document.tasks.filtered(filter);
        let summary = ExportSummary {
            sections: parsed.document.section_summaries(),
            dates: parsed.document.date_totals(),
            total_minutes: parsed.document.total_minutes(),
        };

        match (self.format, data) {
            (ExportFormat::Csv, ExportData::Tasks) => Self::tasks_csv(&tasks, writer),
            (ExportFormat::Csv, ExportData::Summary) => Self::summary_csv(&summary, writer),
            (ExportFormat::Csv, ExportData::All) => Self::all_csv(&summary, &tasks, &parsed.diagnostics, writer),
            (ExportFormat::Json, ExportData::Tasks) => Self::json(&tasks, writer),
            (ExportFormat::Json, ExportData::Summary) => Self::json(&summary, writer),
            (ExportFormat::Json, ExportData::All) => Self::json(
                &ExportAll {
                    summary,
                    tasks,
                    diagnostics: &parsed.diagnostics,
                },
                writer,
            ),
        }
    }

    fn tasks_csv<W: Write>(tasks: &[&Task], writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        Self::write_task_rows(&mut wtr, tasks)?;
        wtr.flush()?;
        Ok(())
    }

    fn summary_csv<W: Write>(summary: &ExportSummary, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        Self::write_summary_rows(&mut wtr, summary)?;
        wtr.flush()?;
        Ok(())
    }

    fn all_csv<W: Write>(summary: &ExportSummary, tasks: &[&Task], diagnostics: &[Diagnostic], writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

        wtr.write_record(["TASKS"])?;
        Self::write_task_rows(&mut wtr, tasks)?;

        wtr.write_record([""])?;
        wtr.write_record(["SUMMARY"])?;
        Self::write_summary_rows(&mut wtr, summary)?;

        wtr.write_record([""])?;
        wtr.write_record(["DIAGNOSTICS"])?;
        wtr.write_record(["Line", "Severity", "Message"])?;
        for diagnostic in diagnostics {
            let message = Diagnostic {
                line: None,
                ..diagnostic.clone()
            };
            wtr.write_record([
                diagnostic.line.map(|line| line.to_string()).unwrap_or_default(),
                format!("{:?}", diagnostic.severity()).to_lowercase(),
                message.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_task_rows<W: Write>(wtr: &mut csv::Writer<W>, tasks: &[&Task]) -> Result<()> {
        wtr.write_record(["Line", "Section", "Date", "Start", "End", "Duration", "Minutes", "Category", "Description"])?;
        for task in tasks {
            let formatted = FormattedTask::from(*task);
            wtr.write_record([
                formatted.line.to_string(),
                formatted.section,
                formatted.date,
                formatted.start,
                formatted.end,
                formatted.duration,
                task.total_minutes.to_string(),
                formatted.category,
                formatted.description,
            ])?;
        }
        Ok(())
    }

    fn write_summary_rows<W: Write>(wtr: &mut csv::Writer<W>, summary: &ExportSummary) -> Result<()> {
        wtr.write_record(["Section", "Tasks", "Total", "Expected", "Difference"])?;
        for section in &summary.sections {
            wtr.write_record([
                section.name.clone(),
                section.task_count.to_string(),
                format_minutes(section.total_minutes),
                format_expected(section.expected_minutes),
                section.difference_minutes.map(format_difference).unwrap_or_default(),
            ])?;
        }

        wtr.write_record([""])?;
        wtr.write_record(["Date", "Total"])?;
        for date in &summary.dates {
            wtr.write_record([date.date.clone().unwrap_or_default(), format_minutes(date.total_minutes)])?;
        }
        wtr.write_record(["Total".to_string(), format_minutes(summary.total_minutes)])?;
        Ok(())
    }

    fn json<T: Serialize, W: Write>(value: &T, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        Ok(())
    }
}
