//! Validates a timesheet and lists its diagnostics.
//!
//! Exits with an error when the file cannot be parsed, when recovered
//! malformed lines were skipped, or with `--deny-warnings` when any
//! diagnostic was produced.

use super::{print_diagnostics, SourceArgs};
use crate::{
    libs::{config::Config, messages::Message, timesheet::Severity},
    msg_error_anyhow, msg_info, msg_success,
};
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Fail when any warning is reported
    #[arg(long)]
    deny_warnings: bool,
}

pub fn cmd(check_args: CheckArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let parsed = check_args.source.load(&config)?;

    print_diagnostics(&parsed.diagnostics);

    if parsed.has_errors() {
        let count = parsed.diagnostics.iter().filter(|d| d.severity() == Severity::Error).count();
        return Err(msg_error_anyhow!(Message::RecoveredErrorsFound(count)).into());
    }
    if check_args.deny_warnings && !parsed.diagnostics.is_empty() {
        return Err(msg_error_anyhow!(Message::WarningsDenied(parsed.diagnostics.len())).into());
    }

    if !parsed.diagnostics.is_empty() {
        msg_info!(Message::DiagnosticsFound(parsed.diagnostics.len()));
    }
    msg_success!(Message::TimesheetValid {
        sections: parsed.document.sections.len(),
        tasks: parsed.document.tasks.len(),
    });

    Ok(())
}
