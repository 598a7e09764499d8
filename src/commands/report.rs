use super::SourceArgs;
use crate::{
    libs::{
        config::Config,
        formatter::FormattedTask,
        messages::Message,
        summary::Summarize,
        task::{FilterTasks, TaskFilter},
        view::View,
    },
    msg_print,
};
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(long, help = "Show the task table")]
    tasks: bool,

    #[arg(long, help = "Show totals per date")]
    dates: bool,

    #[arg(long, help = "Only list tasks of this section", conflicts_with = "date")]
    section: Option<String>,

    #[arg(long, help = "Only list tasks of this date (YYYY-MM-DD)")]
    date: Option<String>,
}

impl ReportArgs {
    fn filter(&self) -> TaskFilter {
        match (&self.section, &self.date) {
            (Some(section), _) => TaskFilter::Section(section.clone()),
            (None, Some(date)) => TaskFilter::Date(date.clone()),
            (None, None) => TaskFilter::All,
        }
    }
}

pub fn cmd(report_args: ReportArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let report_config = config.report_options();
    let parsed = report_args.source.load(&config)?;
    let document = &parsed.document;

    msg_print!(Message::ReportHeader(report_args.source.source_name()), true);
    msg_print!(Message::SectionsHeader);
    View::sections(&document.section_summaries(), document.total_minutes())?;

    if report_args.dates || report_config.show_dates {
        msg_print!(Message::DatesHeader, true);
        View::dates(&document.date_totals())?;
    }

    let filter = report_args.filter();
    let wants_tasks = report_args.tasks || report_config.show_tasks || !matches!(filter, TaskFilter::All);
    if wants_tasks {
        let tasks: Vec<FormattedTask> = document.tasks.filtered(&filter).into_iter().map(FormattedTask::from).collect();
        msg_print!(Message::TasksHeader, true);
        if tasks.is_empty() {
            msg_print!(Message::NoTasksFound);
        } else {
            View::tasks(&tasks)?;
        }
    }

    if !parsed.diagnostics.is_empty() {
        msg_print!(Message::DiagnosticsHeader, true);
        View::diagnostics(&parsed.diagnostics)?;
    }

    Ok(())
}
