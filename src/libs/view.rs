use super::formatter::{format_minutes, FormattedTask};
use super::summary::{DateTotal, FormattedSectionSummary, SectionSummary};
use super::timesheet::Diagnostic;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn sections(summaries: &[SectionSummary], total_minutes: i32) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["SECTION", "TASKS", "TOTAL", "EXPECTED", "DIFFERENCE"]);
        for summary in summaries.iter().map(FormattedSectionSummary::from) {
            table.add_row(row![summary.name, summary.task_count, summary.total, summary.expected, summary.difference]);
        }
        table.add_row(row!["TOTAL", "", format_minutes(total_minutes), "", ""]);
        table.printstd();

        Ok(())
    }

    pub fn dates(totals: &[DateTotal]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TOTAL"]);
        for total in totals {
            table.add_row(row![total.date.as_deref().unwrap_or("-"), format_minutes(total.total_minutes)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[FormattedTask]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["LINE", "SECTION", "DATE", "FROM", "TO", "TOTAL", "CATEGORY", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.line,
                task.section,
                task.date,
                task.start,
                task.end,
                task.duration,
                task.category,
                task.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn diagnostics(diagnostics: &[Diagnostic]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["LINE", "SEVERITY", "MESSAGE"]);
        for diagnostic in diagnostics {
            let line = diagnostic.line.map(|line| line.to_string()).unwrap_or_default();
            let severity = format!("{:?}", diagnostic.severity()).to_lowercase();
            let message = Diagnostic { line: None, ..diagnostic.clone() }.to_string();
            table.add_row(row![line, severity, message]);
        }
        table.printstd();

        Ok(())
    }
}
