#[derive(Debug, Clone)]
pub enum Message {
    // === INPUT MESSAGES ===
    FileReadError(String), // path
    ReadingStdin,
    ParseFailed(String), // error

    // === CHECK MESSAGES ===
    TimesheetValid {
        sections: usize,
        tasks: usize,
    },
    DiagnosticsFound(usize),         // count
    WarningsDenied(usize),           // count
    RecoveredErrorsFound(usize),     // count

    // === REPORT MESSAGES ===
    ReportHeader(String), // source
    SectionsHeader,
    DatesHeader,
    TasksHeader,
    DiagnosticsHeader,
    NoTasksFound,

    // === EXPORT MESSAGES ===
    DataExported(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigModuleParser,
    ConfigModuleReport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptRecoverMalformed,
    PromptImplicitSection,
    PromptShowTasks,
    PromptShowDates,
}
