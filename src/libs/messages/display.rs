//! Display implementation for tally application messages.
//!
//! All user-facing text lives here, so commands only pick a [`Message`]
//! variant and the `msg_*!` macros decide where it is printed.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === INPUT MESSAGES ===
            Message::FileReadError(path) => format!("Failed to read timesheet file: {}", path),
            Message::ReadingStdin => "Reading timesheet from standard input".to_string(),
            Message::ParseFailed(error) => format!("Timesheet could not be parsed: {}", error),

            // === CHECK MESSAGES ===
            Message::TimesheetValid { sections, tasks } => {
                format!("Timesheet is valid: {} section(s), {} task(s)", sections, tasks)
            }
            Message::DiagnosticsFound(count) => format!("{} diagnostic(s) found", count),
            Message::WarningsDenied(count) => format!("{} warning(s) treated as errors", count),
            Message::RecoveredErrorsFound(count) => format!("{} malformed line(s) were skipped", count),

            // === REPORT MESSAGES ===
            Message::ReportHeader(source) => format!("Report for {}", source),
            Message::SectionsHeader => "Sections:".to_string(),
            Message::DatesHeader => "Dates:".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::DiagnosticsHeader => "Diagnostics:".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),

            // === EXPORT MESSAGES ===
            Message::DataExported(path) => format!("Data exported successfully to: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleParser => "Parser settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptRecoverMalformed => "Skip malformed lines instead of stopping".to_string(),
            Message::PromptImplicitSection => "Section for tasks before the first header (empty to reject them)".to_string(),
            Message::PromptShowTasks => "Show the task table in reports".to_string(),
            Message::PromptShowDates => "Show per-date totals in reports".to_string(),
        };
        write!(f, "{}", text)
    }
}
