//! Exports a parsed timesheet to CSV or JSON.

use super::{print_diagnostics, SourceArgs};
use crate::{
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        task::TaskFilter,
    },
    msg_success,
};
use clap::Args;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Type of data to export
    #[arg(short, long, value_enum, default_value = "tasks")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path, `-` for standard output
    ///
    /// Defaults to a timestamped file such as `tally_export_20250115_143022.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only export tasks of this section
    #[arg(long, conflicts_with = "date")]
    section: Option<String>,

    /// Only export tasks of this date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

pub fn cmd(export_args: ExportArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let parsed = export_args.source.load(&config)?;
    print_diagnostics(&parsed.diagnostics);

    let filter = match (export_args.section, export_args.date) {
        (Some(section), _) => TaskFilter::Section(section),
        (None, Some(date)) => TaskFilter::Date(date),
        (None, None) => TaskFilter::All,
    };

    let exporter = Exporter::new(export_args.format, export_args.output);
    exporter.export(export_args.data, &parsed, &filter)?;

    if !exporter.is_stdout() {
        msg_success!(Message::DataExported(exporter.output_path().display().to_string()));
    }
    Ok(())
}
